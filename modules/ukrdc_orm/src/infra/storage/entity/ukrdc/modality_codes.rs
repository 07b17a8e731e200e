use sea_orm::entity::prelude::*;

/// Registry modality codes. The flag columns are `BIT(1)` in production.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "modality_codes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(8))")]
    pub registry_code: String,

    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub registry_code_desc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(3))")]
    pub registry_code_type: String,
    pub acute: bool,
    pub transfer_in: bool,
    pub ckd: bool,
    pub cons: bool,
    pub rrt: bool,
    #[sea_orm(column_type = "String(StringLen::N(8))", nullable)]
    pub equiv_modality: Option<String>,
    pub end_of_care: bool,
    pub is_imprecise: bool,
    #[sea_orm(column_type = "String(StringLen::N(4))", nullable)]
    pub nhsbt_transplant_type: Option<String>,
    pub transfer_out: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
