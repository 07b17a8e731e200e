use sea_orm::entity::prelude::*;

use super::super::aliases;

/// Cause of death, keyed on the owning record (at most one per record).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "causeofdeath")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub pid: String,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
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
    pub enteredon: Option<DateTime>,
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

// `id` mirrors `pid` only while the primary key stays single-column.
aliases! {
    id => pid: String,
    diagnosis_type => diagnosistype: Option<String>,
    diagnosing_clinician_code => diagnosingcliniciancode: Option<String>,
    diagnosing_clinician_code_std => diagnosingcliniciancodestd: Option<String>,
    diagnosing_clinician_desc => diagnosingcliniciandesc: Option<String>,
    diagnosis_code => diagnosiscode: Option<String>,
    diagnosis_code_std => diagnosiscodestd: Option<String>,
    diagnosis_desc => diagnosisdesc: Option<String>,
    entered_on => enteredon: Option<DateTime>,
    updated_on => updatedon: Option<DateTime>,
    action_code => actioncode: Option<String>,
    external_id => externalid: Option<String>,
}
