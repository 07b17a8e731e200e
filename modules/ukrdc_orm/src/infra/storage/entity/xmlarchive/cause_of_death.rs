use sea_orm::entity::prelude::*;

use super::touch_update_date;

/// Archived cause of death. A patient may carry several, so every XML field
/// is kept.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "causeofdeath")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub patientid: Option<i32>,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    pub update_date: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub diagnosistype: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub diagnosiscode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub diagnosiscodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub diagnosisdesc: Option<String>,
    pub comments: Option<String>,
    pub verificationstatus: Option<String>,
    pub enteredon: Option<DateTime>,
    pub updatedon: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub externalid: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::patient::Entity",
        from = "Column::Patientid",
        to = "super::patient::Column::Id",
        on_delete = "Cascade"
    )]
    Patient,
}

impl Related<super::patient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Patient.def()
    }
}

touch_update_date!();
