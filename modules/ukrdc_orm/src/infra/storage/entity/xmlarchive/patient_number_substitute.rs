use sea_orm::entity::prelude::*;

/// Integer stand-in for patient numbers too long for the UKRDC columns.
/// Not linked to `patient_demog`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "patientnumbersubstitute")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub ukrdc_patientid: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub ukrdc_organisation: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
