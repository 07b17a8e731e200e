use sea_orm::entity::prelude::*;

/// Renal centres known to the registry.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(10))")]
    pub centre_code: String,

    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub centre_name: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(6))", nullable)]
    pub country_code: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub region_code: Option<String>,
    pub paed_unit: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
