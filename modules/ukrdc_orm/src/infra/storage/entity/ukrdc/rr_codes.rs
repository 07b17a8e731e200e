use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rr_codes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub rr_code: String,

    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub description_1: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(70))", nullable)]
    pub description_2: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(60))", nullable)]
    pub description_3: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub old_value: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub old_value_2: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub new_value: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
