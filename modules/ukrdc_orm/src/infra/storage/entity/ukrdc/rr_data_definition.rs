//! Field-level rules used by the registry data loader

use sea_orm::entity::prelude::*;

use super::super::aliases;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rr_data_definition")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(5))")]
    pub upload_key: String,

    #[sea_orm(column_name = "TABLE_NAME", column_type = "String(StringLen::N(30))")]
    pub table_name: String,
    #[sea_orm(column_type = "String(StringLen::N(30))")]
    pub field_name: String,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub code_id: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((1, 0)))", nullable)]
    pub mandatory: Option<Decimal>,
    #[sea_orm(column_name = "TYPE", column_type = "String(StringLen::N(1))", nullable)]
    pub code_type: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(30))", nullable)]
    pub alt_constraint: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(30))", nullable)]
    pub alt_desc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(1))", nullable)]
    pub extra_val: Option<String>,
    pub error_type: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((1, 0)))", nullable)]
    pub paed_mand: Option<Decimal>,
    #[sea_orm(column_name = "ckd5_mand", column_type = "Decimal(Some((1, 0)))", nullable)]
    pub ckd5_mand_numeric: Option<Decimal>,
    #[sea_orm(column_type = "String(StringLen::N(30))", nullable)]
    pub dependant_field: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(30))", nullable)]
    pub alt_validation: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub file_prefix: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((38, 4)))", nullable)]
    pub load_min: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((38, 4)))", nullable)]
    pub load_max: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((38, 4)))", nullable)]
    pub remove_min: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((38, 4)))", nullable)]
    pub remove_max: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((1, 0)))", nullable)]
    pub in_month: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((1, 0)))", nullable)]
    pub aki_mand: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((1, 0)))", nullable)]
    pub rrt_mand: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((1, 0)))", nullable)]
    pub cons_mand: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((1, 0)))", nullable)]
    pub ckd4_mand: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((1, 0)))", nullable)]
    pub valid_before_dob: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((1, 0)))", nullable)]
    pub valid_after_dod: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((1, 0)))", nullable)]
    pub in_quarter: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

aliases! {
    r#type => code_type: Option<String>,
    ckd5_mand => ckd5_mand_numeric: Option<Decimal>,
}
