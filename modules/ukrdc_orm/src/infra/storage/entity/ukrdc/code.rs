//! Code lists shared by every coded column in the repository

use std::fmt;

use sea_orm::entity::prelude::*;

use super::super::Opt;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "code_list")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(256))")]
    pub coding_standard: String,
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(256))")]
    pub code: String,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    #[sea_orm(column_type = "String(StringLen::N(256))", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(256))", nullable)]
    pub object_type: Option<String>,
    pub update_date: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(256))", nullable)]
    pub units: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub pkb_reference_range: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(365))", nullable)]
    pub pkb_comment: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Code({}:{}) <{}>",
            self.coding_standard,
            self.code,
            Opt(&self.description)
        )
    }
}

/// Looks up the description of `code` within `coding_standard`.
///
/// Returns `Ok(None)` when either part is missing or no entry matches.
pub async fn describe<C: ConnectionTrait>(
    db: &C,
    coding_standard: Option<&str>,
    code: Option<&str>,
) -> Result<Option<String>, DbErr> {
    let (Some(coding_standard), Some(code)) = (coding_standard, code) else {
        return Ok(None);
    };
    let entry = Entity::find_by_id((coding_standard.to_owned(), code.to_owned()))
        .one(db)
        .await?;
    Ok(entry.and_then(|e| e.description))
}
