use sea_orm::entity::prelude::*;

/// Master records that share a group of UKRDC IDs and need resolving.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "multiple_ukrdcid")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub group_id: i32,
    pub master_id: i32,
    #[sea_orm(default_value = false)]
    pub resolved: Option<bool>,
    pub last_updated: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
