use std::fmt;

use sea_orm::entity::prelude::*;

use super::super::Opt;

/// Identifier issued to a patient by an organisation (NHS number, MRN, ...).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "patientnumber")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub pid: Option<String>,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    pub idx: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable, indexed)]
    pub patientid: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(3))", nullable)]
    pub numbertype: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub organization: Option<String>,
    pub updatedon: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(3))", nullable)]
    pub actioncode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub externalid: Option<String>,
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
            "PatientNumber({}) <{}:{}:{}>",
            Opt(&self.pid),
            Opt(&self.organization),
            Opt(&self.numbertype),
            Opt(&self.patientid)
        )
    }
}
