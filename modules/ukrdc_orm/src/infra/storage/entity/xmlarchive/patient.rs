use sea_orm::entity::prelude::*;

use super::super::aliases;

/// Archived demographics. Unique on
/// (sendingfacility, nationalid, numbertype, organization).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "patient_demog")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    #[sea_orm(column_type = "String(StringLen::N(7))")]
    pub sendingfacility: String,
    /// The patient number as held in the UKRDC.
    #[sea_orm(column_type = "String(StringLen::N(50))", indexed)]
    pub nationalid: String,
    #[sea_orm(column_type = "String(StringLen::N(3))")]
    pub numbertype: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub organization: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::treatment::Entity")]
    Treatment,
    #[sea_orm(has_many = "super::assessment::Entity")]
    Assessment,
    #[sea_orm(has_many = "super::dialysis_prescription::Entity")]
    DialysisPrescription,
    #[sea_orm(has_many = "super::diagnosis::Entity")]
    Diagnosis,
    #[sea_orm(has_many = "super::cause_of_death::Entity")]
    CauseOfDeath,
    #[sea_orm(has_many = "super::renal_diagnosis::Entity")]
    RenalDiagnosis,
}

impl Related<super::treatment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Treatment.def()
    }
}

impl Related<super::assessment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessment.def()
    }
}

impl Related<super::dialysis_prescription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DialysisPrescription.def()
    }
}

impl Related<super::diagnosis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Diagnosis.def()
    }
}

impl Related<super::cause_of_death::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CauseOfDeath.def()
    }
}

impl Related<super::renal_diagnosis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RenalDiagnosis.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

aliases! {
    patientid => nationalid: String,
}
