use sea_orm::entity::prelude::*;

use super::super::aliases;

/// ODS organisation type for GP codes.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "gp_type")]
pub enum GpType {
    #[sea_orm(string_value = "GP")]
    Gp,
    #[sea_orm(string_value = "PRACTICE")]
    Practice,
}

/// ODS register of GPs and GP practices.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ukrdc_ods_gp_codes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(8))")]
    pub code: String,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub name: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(35))", nullable)]
    pub address1: Option<String>,
    pub postcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(12))", nullable)]
    pub phone: Option<String>,
    pub r#type: Option<GpType>,
    pub update_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

aliases! {
    gpname => name: Option<String>,
    street => address1: Option<String>,
    contactvalue => phone: Option<String>,
}
