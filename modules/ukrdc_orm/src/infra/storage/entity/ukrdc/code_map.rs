use sea_orm::entity::prelude::*;

/// Mapping of a code in one coding standard onto another.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "code_map")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(256))")]
    pub source_coding_standard: String,
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(256))")]
    pub source_code: String,
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(256))")]
    pub destination_coding_standard: String,
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(256))")]
    pub destination_code: String,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    pub update_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
