use std::fmt;

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "workitem")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "personid")]
    pub person_id: i32,
    #[sea_orm(column_name = "masterid")]
    pub master_id: i32,
    /// Work item category code set by the index.
    pub r#type: i32,
    pub description: String,
    pub status: i32,
    #[sea_orm(column_name = "creationdate")]
    pub creation_date: Option<DateTime>,
    #[sea_orm(column_name = "lastupdated")]
    pub last_updated: DateTime,
    #[sea_orm(column_name = "updatedby")]
    pub updated_by: Option<String>,
    #[sea_orm(column_name = "updatedesc")]
    pub update_description: Option<String>,
    /// Serialised attributes attached by the index.
    pub attributes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::PersonId",
        to = "super::person::Column::Id"
    )]
    Person,
    #[sea_orm(
        belongs_to = "super::master_record::Entity",
        from = "Column::MasterId",
        to = "super::master_record::Column::Id"
    )]
    MasterRecord,
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl Related<super::master_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MasterRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WorkItem({}) <{}, {}>",
            self.id, self.person_id, self.master_id
        )
    }
}
