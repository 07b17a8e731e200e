use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "validationerror")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub vid: i32,
    pub pid: Option<String>,
    #[sea_orm(column_name = "updatedon")]
    pub updated_on: Option<DateTime>,
    #[sea_orm(column_name = "errortype")]
    pub error_type: Option<String>,
    pub message: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
