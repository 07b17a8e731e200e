use std::fmt;

use sea_orm::entity::prelude::*;

use super::super::Opt;

/// A patient as known to one originating system.
///
/// `localid` is unique so that `pidxref.pid` can reference it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "person")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Sending facility code, or `UKRDC` for renal registry persons.
    pub originator: String,
    /// Local identifier. Unique across persons because `pidxref` joins on it.
    #[sea_orm(unique)]
    pub localid: String,
    #[sea_orm(column_name = "localidtype")]
    pub localid_type: String,
    pub nationalid: Option<String>,
    #[sea_orm(column_name = "nationalidtype")]
    pub nationalid_type: Option<String>,
    #[sea_orm(column_name = "dateofbirth")]
    pub date_of_birth: Date,
    pub gender: String,
    #[sea_orm(column_name = "dateofdeath")]
    pub date_of_death: Option<Date>,
    pub givenname: Option<String>,
    pub surname: Option<String>,
    #[sea_orm(column_name = "prevsurname")]
    pub prev_surname: Option<String>,
    #[sea_orm(column_name = "othergivennames")]
    pub other_given_names: Option<String>,
    pub title: Option<String>,
    pub postcode: Option<String>,
    pub street: Option<String>,
    #[sea_orm(column_name = "stdsurname")]
    pub std_surname: Option<String>,
    #[sea_orm(column_name = "stdprevsurname")]
    pub std_prev_surname: Option<String>,
    #[sea_orm(column_name = "stdgivenname")]
    pub std_given_name: Option<String>,
    #[sea_orm(column_name = "stdpostcode")]
    pub std_postcode: Option<String>,
    /// Excludes the person from duplicate detection.
    #[sea_orm(column_name = "skipduplicatecheck")]
    pub skip_duplicate_check: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::link_record::Entity")]
    LinkRecord,
    #[sea_orm(has_many = "super::work_item::Entity")]
    WorkItem,
    #[sea_orm(has_many = "super::pid_xref::Entity")]
    PidXRef,
}

impl Related<super::link_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LinkRecord.def()
    }
}

impl Related<super::work_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkItem.def()
    }
}

impl Related<super::pid_xref::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PidXRef.def()
    }
}

impl Related<super::master_record::Entity> for Entity {
    fn to() -> RelationDef {
        super::link_record::Relation::MasterRecord.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::link_record::Relation::Person.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person({}) <{} {} {} {}:{}>",
            self.id,
            Opt(&self.givenname),
            Opt(&self.surname),
            self.date_of_birth,
            self.localid_type.trim(),
            self.localid.trim()
        )
    }
}
