//! Clinical observations (blood pressure, weight, PROMs values, ...)

use std::fmt;

use sea_orm::entity::prelude::*;

use super::super::{aliases, ColumnInfo, Opt};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "observation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub pid: Option<String>,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    pub idx: Option<i32>,
    pub observationtime: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub observationcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub observationcodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub observationdesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub observationvalue: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub observationunits: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(4))", nullable)]
    pub prepost: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub commenttext: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub cliniciancode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub cliniciancodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub cliniciandesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredatcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredatcodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteredatdesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteringorganizationcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteringorganizationcodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub enteringorganizationdesc: Option<String>,
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

impl Column {
    /// Label and description for this column.
    pub fn info(&self) -> ColumnInfo {
        match self {
            Self::Id => ColumnInfo::new(
                "Observation ID",
                "Unique identifier for the observation record.",
            ),
            Self::Pid => ColumnInfo::new(
                "Patient ID",
                "Identifier of the patient associated with this observation.",
            ),
            Self::CreationDate => ColumnInfo::new(
                "Creation Date",
                "Date and time when the observation record was created.",
            ),
            Self::Idx => ColumnInfo::new("Index", "Index for the observation."),
            Self::Observationtime => ColumnInfo::new(
                "Observation Time",
                "Date and time when the observation was made.",
            ),
            Self::Observationcode => ColumnInfo::new(
                "Observation Code",
                "Code for the observation - UKRR, PV or SNOMED Coding Standards.",
            ),
            Self::Observationcodestd => ColumnInfo::new(
                "Observation Code Standard",
                "Coding standard used for the observation code (UKRR, PV, SNOMED).",
            ),
            Self::Observationdesc => ColumnInfo::new(
                "Observation Description",
                "Text description of the observation recorded.",
            ),
            Self::Observationvalue => {
                ColumnInfo::new("Observation Value", "The measured or observed value.")
            }
            Self::Observationunits => ColumnInfo::new(
                "Observation Units",
                "Units of measurement for the observation value.",
            ),
            Self::Prepost => ColumnInfo::new(
                "Pre/Post Indicator",
                "Indicates whether the observation was made PRE or POST dialysis (PRE, POST, UNK, NA).",
            ),
            Self::Commenttext => ColumnInfo::new(
                "Comment Text",
                "Free-text comment associated with the observation.",
            ),
            Self::Cliniciancode => ColumnInfo::new(
                "Clinician Code",
                "Code identifying the clinician associated with this observation.",
            ),
            Self::Cliniciancodestd => ColumnInfo::new(
                "Clinician Code Standard",
                "Coding standard used for the clinician code.",
            ),
            Self::Cliniciandesc => ColumnInfo::new(
                "Clinician Description",
                "Name or description of the clinician.",
            ),
            Self::Enteredatcode => ColumnInfo::new(
                "Entered At Code",
                "Code for the location where the observation was entered.",
            ),
            Self::Enteredatcodestd => ColumnInfo::new(
                "Entered At Code Standard",
                "Coding standard used for the entered-at code.",
            ),
            Self::Enteredatdesc => ColumnInfo::new(
                "Entered At Description",
                "Text description of the location where the observation was entered.",
            ),
            Self::Enteringorganizationcode => ColumnInfo::new(
                "Entering Organization Code",
                "Code identifying the organization entering the observation.",
            ),
            Self::Enteringorganizationcodestd => ColumnInfo::new(
                "Entering Organization Code Standard",
                "Coding standard used for the entering organization code.",
            ),
            Self::Enteringorganizationdesc => ColumnInfo::new(
                "Entering Organization Description",
                "Text description of the organization entering the observation.",
            ),
            Self::Updatedon => ColumnInfo::new("Updated On", "Last Modified Date"),
            Self::Actioncode => ColumnInfo::new(
                "Action Code",
                "Code representing the action performed on the observation record.",
            ),
            Self::Externalid => ColumnInfo::new("External ID", "Unique Identifier"),
            Self::UpdateDate => ColumnInfo::new(
                "Update Date",
                "Date and time when the record was last updated.",
            ),
        }
    }
}

aliases! {
    observation_time => observationtime: Option<DateTime>,
    observation_code => observationcode: Option<String>,
    observation_code_std => observationcodestd: Option<String>,
    observation_desc => observationdesc: Option<String>,
    observation_value => observationvalue: Option<String>,
    observation_units => observationunits: Option<String>,
    comment_text => commenttext: Option<String>,
    clinician_code => cliniciancode: Option<String>,
    clinician_code_std => cliniciancodestd: Option<String>,
    clinician_desc => cliniciandesc: Option<String>,
    entered_at => enteredatcode: Option<String>,
    entered_at_description => enteredatdesc: Option<String>,
    entering_organization_code => enteringorganizationcode: Option<String>,
    entering_organization_description => enteringorganizationdesc: Option<String>,
    updated_on => updatedon: Option<DateTime>,
    action_code => actioncode: Option<String>,
    external_id => externalid: Option<String>,
    pre_post => prepost: Option<String>,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Observation({}) <{} {}>",
            Opt(&self.pid),
            Opt(&self.observationcode),
            Opt(&self.observationvalue)
        )
    }
}
