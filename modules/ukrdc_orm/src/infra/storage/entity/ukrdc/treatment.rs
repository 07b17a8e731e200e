//! Renal replacement therapy episodes

use sea_orm::entity::prelude::*;

use super::super::aliases;
use super::code;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "treatment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub pid: Option<String>,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    pub idx: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub encounternumber: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub encountertype: Option<String>,
    pub fromtime: Option<DateTime>,
    pub totime: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub admittingcliniciancode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub admittingcliniciancodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub admittingcliniciandesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub admitreasoncode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub admitreasoncodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub admitreasondesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub admissionsourcecode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub admissionsourcecodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub admissionsourcedesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub dischargereasoncode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub dischargereasoncodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub dischargereasondesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub dischargelocationcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub dischargelocationcodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub dischargelocationdesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub healthcarefacilitycode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub healthcarefacilitycodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub healthcarefacilitydesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredatcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredatcodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredatdesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub visitdescription: Option<String>,
    pub updatedon: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(3))", nullable)]
    pub actioncode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub externalid: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub hdp01: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub hdp02: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub hdp03: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub hdp04: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub qbl05: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub qbl06: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub qbl07: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub erf61: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub pat35: Option<String>,
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

/// Code-list entry describing the admission reason, matched on (code standard, code).
#[derive(Debug)]
pub struct AdmitReasonCode;

impl Linked for AdmitReasonCode {
    type FromEntity = Entity;
    type ToEntity = code::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Entity::belongs_to(code::Entity)
            .from((Column::Admitreasoncodestd, Column::Admitreasoncode))
            .to((code::Column::CodingStandard, code::Column::Code))
            .into()]
    }
}

/// Code-list entry describing the discharge reason, matched on (code standard, code).
#[derive(Debug)]
pub struct DischargeReasonCode;

impl Linked for DischargeReasonCode {
    type FromEntity = Entity;
    type ToEntity = code::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Entity::belongs_to(code::Entity)
            .from((Column::Dischargereasoncodestd, Column::Dischargereasoncode))
            .to((code::Column::CodingStandard, code::Column::Code))
            .into()]
    }
}

impl Model {
    /// Description of the admission reason from the code list.
    pub async fn admit_reason_desc<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Option<String>, DbErr> {
        code::describe(
            db,
            self.admitreasoncodestd.as_deref(),
            self.admitreasoncode.as_deref(),
        )
        .await
    }

    /// Description of the discharge reason from the code list.
    pub async fn discharge_reason_desc<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Option<String>, DbErr> {
        code::describe(
            db,
            self.dischargereasoncodestd.as_deref(),
            self.dischargereasoncode.as_deref(),
        )
        .await
    }
}

aliases! {
    encounter_number => encounternumber: Option<String>,
    encounter_type => encountertype: Option<String>,
    from_time => fromtime: Option<DateTime>,
    to_time => totime: Option<DateTime>,
    admitting_clinician_code => admittingcliniciancode: Option<String>,
    admitting_clinician_code_std => admittingcliniciancodestd: Option<String>,
    admitting_clinician_desc => admittingcliniciandesc: Option<String>,
    admission_source_code => admissionsourcecode: Option<String>,
    admission_source_code_std => admissionsourcecodestd: Option<String>,
    admission_source_desc => admissionsourcedesc: Option<String>,
    admit_reason_code => admitreasoncode: Option<String>,
    admit_reason_code_std => admitreasoncodestd: Option<String>,
    discharge_reason_code => dischargereasoncode: Option<String>,
    discharge_reason_code_std => dischargereasoncodestd: Option<String>,
    discharge_location_code => dischargelocationcode: Option<String>,
    discharge_location_code_std => dischargelocationcodestd: Option<String>,
    discharge_location_desc => dischargelocationdesc: Option<String>,
    health_care_facility_code => healthcarefacilitycode: Option<String>,
    health_care_facility_code_std => healthcarefacilitycodestd: Option<String>,
    health_care_facility_desc => healthcarefacilitydesc: Option<String>,
    entered_at_code => enteredatcode: Option<String>,
    visit_description => visitdescription: Option<String>,
    updated_on => updatedon: Option<DateTime>,
    action_code => actioncode: Option<String>,
    external_id => externalid: Option<String>,
}
