use std::fmt;

use sea_orm::entity::prelude::*;

use super::super::Opt;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "masterrecord")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "lastupdated")]
    pub last_updated: DateTime,
    #[sea_orm(column_name = "dateofbirth")]
    pub date_of_birth: Date,
    pub gender: Option<String>,
    pub givenname: Option<String>,
    pub surname: Option<String>,
    /// NHS, CHI, HSC or UKRDC number, depending on `nationalid_type`.
    pub nationalid: String,
    #[sea_orm(column_name = "nationalidtype")]
    pub nationalid_type: String,
    /// Status code maintained by the index.
    pub status: i32,
    /// When the current demographics took effect.
    #[sea_orm(column_name = "effectivedate")]
    pub effective_date: DateTime,
    #[sea_orm(column_name = "creationdate")]
    pub creation_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::link_record::Entity")]
    LinkRecord,
    #[sea_orm(has_many = "super::work_item::Entity")]
    WorkItem,
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

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        super::link_record::Relation::Person.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::link_record::Relation::MasterRecord.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MasterRecord({}) <{} {} {} {}:{}>",
            self.id,
            Opt(&self.givenname),
            Opt(&self.surname),
            self.date_of_birth,
            self.nationalid_type.trim(),
            self.nationalid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn display_trims_padded_national_id_type() {
        let now = NaiveDate::from_ymd_opt(2022, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or_default();
        let record = Model {
            id: 7,
            last_updated: now,
            date_of_birth: NaiveDate::from_ymd_opt(1950, 6, 15).unwrap_or_default(),
            gender: Some("1".to_string()),
            givenname: Some("Jane".to_string()),
            surname: Some("Doe".to_string()),
            nationalid: "9434765919".to_string(),
            nationalid_type: "NHS       ".to_string(),
            status: 0,
            effective_date: now,
            creation_date: None,
        };
        assert_eq!(
            record.to_string(),
            "MasterRecord(7) <Jane Doe 1950-06-15 NHS:9434765919>"
        );
    }
}
