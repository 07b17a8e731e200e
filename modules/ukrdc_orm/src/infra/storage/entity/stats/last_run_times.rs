use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "last_run_times")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub table: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub facility: String,
    pub last_run_time: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
