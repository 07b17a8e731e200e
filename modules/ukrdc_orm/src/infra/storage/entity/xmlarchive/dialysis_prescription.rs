use sea_orm::entity::prelude::*;

use super::touch_update_date;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dialysisprescription")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub patientid: Option<i32>,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    pub update_date: Option<DateTime>,
    pub enteredon: Option<DateTime>,
    pub fromtime: Option<DateTime>,
    pub totime: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(5))", nullable)]
    pub sessiontype: Option<String>,
    pub sessionsperweek: Option<i32>,
    pub timedialysed: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(5))", nullable)]
    pub vascularaccess: Option<String>,
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
