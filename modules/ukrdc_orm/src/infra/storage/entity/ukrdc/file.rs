use sea_orm::entity::prelude::*;

/// Inbound extract files, keyed by sender and national identifier.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "file")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(7))")]
    pub sendingfacility: String,
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(6))")]
    pub sendingextract: String,
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(50))")]
    pub ni: String,

    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub filename: String,
    /// Hex digest of the file contents.
    #[sea_orm(column_type = "String(StringLen::N(64))")]
    pub checksum: String,
    /// Processing state of the file, e.g. `STORED`.
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub status: String,
    pub received_on: DateTime,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    pub update_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
