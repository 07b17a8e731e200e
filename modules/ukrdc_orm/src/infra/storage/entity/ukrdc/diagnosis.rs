use sea_orm::entity::prelude::*;

use super::super::aliases;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "diagnosis")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub pid: Option<String>,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    pub idx: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub diagnosistype: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub diagnosingcliniciancode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub diagnosingcliniciancodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub diagnosingcliniciandesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub diagnosiscode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub diagnosiscodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub diagnosisdesc: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
    pub identificationtime: Option<DateTime>,
    pub onsettime: Option<DateTime>,
    pub enteredon: Option<DateTime>,
    pub updatedon: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(3))", nullable)]
    pub actioncode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub externalid: Option<String>,
    pub update_date: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredatcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredatcodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredatdesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub encounternumber: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub verificationstatus: Option<String>,
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
    diagnosis_code => diagnosiscode: Option<String>,
    diagnosis_code_std => diagnosiscodestd: Option<String>,
    diagnosis_desc => diagnosisdesc: Option<String>,
    identification_time => identificationtime: Option<DateTime>,
    onset_time => onsettime: Option<DateTime>,
}
