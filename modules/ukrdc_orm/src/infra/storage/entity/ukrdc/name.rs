use std::fmt;

use sea_orm::entity::prelude::*;

use super::super::Opt;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "name")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub pid: Option<String>,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    pub idx: Option<i32>,
    /// `L` marks the legal name.
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub nameuse: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub prefix: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(60))", nullable)]
    pub family: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(60))", nullable)]
    pub given: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(60))", nullable)]
    pub othergivennames: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub suffix: Option<String>,
    pub update_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::patient::Entity",
        from = "Column::Pid",
        to = "super::patient::Column::Pid"
    )]
    Patient,
}

impl Related<super::patient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Patient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name({}) <{} {}>",
            Opt(&self.pid),
            Opt(&self.given),
            Opt(&self.family)
        )
    }
}
