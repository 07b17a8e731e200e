use sea_orm::entity::prelude::*;

/// Audit trail of EMPI changes.
///
/// `personid` and `masterid` deliberately carry no foreign keys: audit rows
/// outlive the records they describe.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "audit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "personid")]
    pub person_id: i32,
    #[sea_orm(column_name = "masterid")]
    pub master_id: i32,
    pub r#type: i32,
    pub description: String,
    #[sea_orm(column_name = "mainnationalid")]
    pub main_nationalid: Option<String>,
    #[sea_orm(column_name = "mainnationalidtype")]
    pub main_nationalid_type: Option<String>,
    #[sea_orm(column_name = "lastupdated")]
    pub last_updated: DateTime,
    #[sea_orm(column_name = "updatedby")]
    pub updated_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
