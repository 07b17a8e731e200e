//! Root of every clinical record held in the repository

use std::fmt;

use sea_orm::entity::prelude::*;

use super::super::{aliases, Opt};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "patientrecord")]
pub struct Model {
    /// Internal record id, shared as the primary key of the one-to-one
    /// patient, cause of death and renal diagnosis rows.
    #[sea_orm(primary_key, auto_increment = false)]
    pub pid: String,

    /// Facility that sent the extract, e.g. `RXF01`.
    #[sea_orm(column_type = "String(StringLen::N(7))")]
    pub sendingfacility: String,
    /// Extract type the record arrived on, e.g. `UKRDC` or `PV`.
    #[sea_orm(column_type = "String(StringLen::N(6))")]
    pub sendingextract: String,
    /// Patient identifier local to the sending facility.
    #[sea_orm(column_type = "String(StringLen::N(17))")]
    pub localpatientid: String,
    pub repositorycreationdate: DateTime,
    pub repositoryupdatedate: DateTime,
    /// Migration flag. Defaults to false.
    #[sea_orm(default_value = false)]
    pub migrated: bool,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    /// UKRDC-wide patient id. Records of the same person share it.
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable, indexed)]
    pub ukrdcid: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub channelname: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub channelid: Option<String>,
    /// Extract time as sent, kept verbatim.
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub extracttime: Option<String>,
    pub startdate: Option<DateTime>,
    pub stopdate: Option<DateTime>,
    /// Version of the RDA XML schema the record was parsed from.
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub schemaversion: Option<String>,
    pub update_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::patient::Entity")]
    Patient,
    #[sea_orm(has_many = "super::lab_order::Entity")]
    LabOrder,
    #[sea_orm(has_many = "super::observation::Entity")]
    Observation,
    #[sea_orm(has_many = "super::social_history::Entity")]
    SocialHistory,
    #[sea_orm(has_many = "super::family_history::Entity")]
    FamilyHistory,
    #[sea_orm(has_many = "super::allergy::Entity")]
    Allergy,
    #[sea_orm(has_many = "super::diagnosis::Entity")]
    Diagnosis,
    #[sea_orm(has_many = "super::cause_of_death::Entity")]
    CauseOfDeath,
    #[sea_orm(has_many = "super::renal_diagnosis::Entity")]
    RenalDiagnosis,
    #[sea_orm(has_many = "super::medication::Entity")]
    Medication,
    #[sea_orm(has_many = "super::dialysis_session::Entity")]
    DialysisSession,
    #[sea_orm(has_many = "super::vascular_access::Entity")]
    VascularAccess,
    #[sea_orm(has_many = "super::procedure::Entity")]
    Procedure,
    #[sea_orm(has_many = "super::document::Entity")]
    Document,
    #[sea_orm(has_many = "super::encounter::Entity")]
    Encounter,
    #[sea_orm(has_many = "super::transplant_list::Entity")]
    TransplantList,
    #[sea_orm(has_many = "super::treatment::Entity")]
    Treatment,
    #[sea_orm(has_many = "super::program_membership::Entity")]
    ProgramMembership,
    #[sea_orm(has_many = "super::transplant::Entity")]
    Transplant,
    #[sea_orm(has_many = "super::opt_out::Entity")]
    OptOut,
    #[sea_orm(has_many = "super::clinical_relationship::Entity")]
    ClinicalRelationship,
    #[sea_orm(has_many = "super::survey::Entity")]
    Survey,
    #[sea_orm(has_one = "super::pv_data::Entity")]
    PvData,
    #[sea_orm(has_many = "super::pv_delete::Entity")]
    PvDelete,
}

macro_rules! related {
    ($($module:ident => $variant:ident),* $(,)?) => {
        $(
            impl Related<super::$module::Entity> for Entity {
                fn to() -> RelationDef {
                    Relation::$variant.def()
                }
            }
        )*
    };
}

related! {
    patient => Patient,
    lab_order => LabOrder,
    observation => Observation,
    social_history => SocialHistory,
    family_history => FamilyHistory,
    allergy => Allergy,
    diagnosis => Diagnosis,
    cause_of_death => CauseOfDeath,
    renal_diagnosis => RenalDiagnosis,
    medication => Medication,
    dialysis_session => DialysisSession,
    vascular_access => VascularAccess,
    procedure => Procedure,
    document => Document,
    encounter => Encounter,
    transplant_list => TransplantList,
    treatment => Treatment,
    program_membership => ProgramMembership,
    transplant => Transplant,
    opt_out => OptOut,
    clinical_relationship => ClinicalRelationship,
    survey => Survey,
    pv_data => PvData,
    pv_delete => PvDelete,
}

/// View-only path from a record to the result items of all its lab orders.
#[derive(Debug)]
pub struct ResultItems;

impl Linked for ResultItems {
    type FromEntity = Entity;
    type ToEntity = super::result_item::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            Relation::LabOrder.def(),
            super::lab_order::Relation::ResultItem.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}

aliases! {
    id => pid: String,
    extract_time => extracttime: Option<String>,
    repository_creation_date => repositorycreationdate: DateTime,
    repository_update_date => repositoryupdatedate: DateTime,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PatientRecord({}) <UKRDCID:{} CREATED:{}>",
            self.pid,
            Opt(&self.ukrdcid),
            self.repositorycreationdate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> Model {
        let created = NaiveDate::from_ymd_opt(2021, 3, 4)
            .and_then(|d| d.and_hms_opt(10, 30, 0))
            .unwrap_or_default();
        Model {
            pid: "000000001".to_string(),
            sendingfacility: "RXF01".to_string(),
            sendingextract: "UKRDC".to_string(),
            localpatientid: "123456".to_string(),
            repositorycreationdate: created,
            repositoryupdatedate: created,
            migrated: false,
            creation_date: created,
            ukrdcid: Some("100000001".to_string()),
            channelname: None,
            channelid: None,
            extracttime: None,
            startdate: None,
            stopdate: None,
            schemaversion: None,
            update_date: None,
        }
    }

    #[test]
    fn display_includes_ukrdcid_and_creation() {
        assert_eq!(
            record().to_string(),
            "PatientRecord(000000001) <UKRDCID:100000001 CREATED:2021-03-04 10:30:00>"
        );
    }

    #[test]
    fn display_prints_none_for_missing_ukrdcid() {
        let mut r = record();
        r.ukrdcid = None;
        assert!(r.to_string().contains("UKRDCID:None"));
    }

    #[test]
    fn aliases_point_at_columns() {
        let r = record();
        assert_eq!(r.id(), "000000001");
        assert_eq!(r.repository_creation_date(), &r.repositorycreationdate);
    }
}
