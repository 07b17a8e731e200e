use std::fmt;

use sea_orm::entity::prelude::*;

/// Cross reference from a UKRDC pid to the sender's local identifier.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pidxref")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pid: String,
    #[sea_orm(column_name = "sendingfacility")]
    pub sending_facility: String,
    #[sea_orm(column_name = "sendingextract")]
    pub sending_extract: String,
    pub localid: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::Pid",
        to = "super::person::Column::Localid"
    )]
    Person,
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PidXRef({}) <{} {} {} {}>",
            self.id,
            self.pid,
            self.sending_facility,
            self.sending_extract,
            self.localid.trim()
        )
    }
}
