use sea_orm::entity::prelude::*;

use super::super::aliases;

/// Haemodialysis session; the `qhd*` columns carry registry-specific session data.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dialysissession")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub pid: Option<String>,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    pub idx: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub proceduretypecode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub proceduretypecodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub proceduretypedesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub cliniciancode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub cliniciancodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub cliniciandesc: Option<String>,
    pub proceduretime: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredbycode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredbycodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredbydesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredatcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredatcodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredatdesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub qhd19: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub qhd20: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub qhd21: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub qhd22: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub qhd30: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub qhd31: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub qhd32: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub qhd33: Option<String>,
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
        belongs_to = "super::patient_record::Entity",
        from = "Column::Pid",
        to = "super::patient_record::Column::Pid"
    )]
    PatientRecord,
}

impl Related<super::patient_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PatientRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

aliases! {
    procedure_type_code => proceduretypecode: Option<String>,
    procedure_type_code_std => proceduretypecodestd: Option<String>,
    procedure_type_desc => proceduretypedesc: Option<String>,
    procedure_time => proceduretime: Option<DateTime>,
}
