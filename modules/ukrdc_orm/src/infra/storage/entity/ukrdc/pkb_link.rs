use sea_orm::entity::prelude::*;

/// Link to a Patients Know Best resource for a coded result.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pkb_links")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub link: Option<String>,
    pub link_name: Option<String>,
    pub coding_standard: Option<String>,
    pub code: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
