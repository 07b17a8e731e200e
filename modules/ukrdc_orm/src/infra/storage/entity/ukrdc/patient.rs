//! Patient demographics, one row per patient record

use std::fmt;

use sea_orm::entity::prelude::*;

use super::super::{aliases, ColumnInfo, Opt};
use super::{name, patient_number};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "patient")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub pid: String,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTime,
    pub birthtime: Option<DateTime>,
    pub deathtime: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(2))", nullable)]
    pub gender: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(3))", nullable)]
    pub countryofbirth: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub ethnicgroupcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub ethnicgroupcodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub ethnicgroupdesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub occupationcode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub occupationcodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub occupationdesc: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub primarylanguagecode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub primarylanguagecodestd: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub primarylanguagedesc: Option<String>,
    pub death: Option<bool>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub persontocontactname: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub persontocontact_relationship: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub persontocontact_contactnumber: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub persontocontact_contactnumbertype: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(200))", nullable)]
    pub persontocontact_contactnumbercomments: Option<String>,
    pub updatedon: Option<DateTime>,
    #[sea_orm(column_type = "String(StringLen::N(3))", nullable)]
    pub actioncode: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub externalid: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub bloodgroup: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub bloodrhesus: Option<String>,
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
    #[sea_orm(has_many = "super::patient_number::Entity")]
    PatientNumber,
    #[sea_orm(has_many = "super::name::Entity")]
    Name,
    #[sea_orm(has_many = "super::contact_detail::Entity")]
    ContactDetail,
    #[sea_orm(has_many = "super::address::Entity")]
    Address,
    #[sea_orm(has_one = "super::family_doctor::Entity")]
    FamilyDoctor,
}

impl Related<super::patient_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PatientRecord.def()
    }
}

impl Related<super::patient_number::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PatientNumber.def()
    }
}

impl Related<super::name::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Name.def()
    }
}

impl Related<super::contact_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContactDetail.def()
    }
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl Related<super::family_doctor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FamilyDoctor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Column {
    /// Label and description for this column.
    pub fn info(&self) -> ColumnInfo {
        match self {
            Self::Pid => ColumnInfo::new(
                "Patient ID",
                "Unique identifier for the patient record, referencing patientrecord.pid.",
            ),
            Self::CreationDate => ColumnInfo::new(
                "Creation Date",
                "Date and time when the record was created.",
            ),
            Self::Birthtime => ColumnInfo::new("Date of Birth", "Patient’s date of birth."),
            Self::Deathtime => ColumnInfo::new(
                "Date of Death",
                "Patient’s date of death, if applicable.",
            ),
            Self::Gender => ColumnInfo::new(
                "Gender",
                "Administrative gender of the patient (1, 2, 9).",
            ),
            Self::Countryofbirth => ColumnInfo::new(
                "Country of Birth",
                "Country code representing the patient’s country of birth from NHS Data Dictionary ISO 3166-1. Use the 3-char alphabetic code.",
            ),
            Self::Ethnicgroupcode => ColumnInfo::new(
                "Ethnic Group Code",
                "Code representing the patient’s ethnic group from NHS Data Dictionary: https://www.datadictionary.nhs.uk/data_elements/ethnic_category.html",
            ),
            Self::Ethnicgroupcodestd => ColumnInfo::new(
                "Ethnic Group Code Standard",
                "Coding standard used for the ethnic group code (NHS_DATA_DICTIONARY).",
            ),
            Self::Ethnicgroupdesc => ColumnInfo::new(
                "Ethnic Group Description",
                "Text description of the patient’s ethnic group.",
            ),
            Self::Occupationcode => ColumnInfo::new(
                "Occupation Code",
                "Code representing the patient’s occupation from NHS Data Dictionary.",
            ),
            Self::Occupationcodestd => ColumnInfo::new(
                "Occupation Code Standard",
                "Coding standard used for the occupation code (NHS_DATA_DICTIONARY_EMPLOYMENT_STATUS).",
            ),
            Self::Occupationdesc => ColumnInfo::new(
                "Occupation Description",
                "Text description of the patient’s occupation.",
            ),
            Self::Primarylanguagecode => ColumnInfo::new(
                "Primary Language Code",
                "Code representing the patient’s primary language from NHS Data Dictionary.",
            ),
            Self::Primarylanguagecodestd => ColumnInfo::new(
                "Primary Language Code Standard",
                "Coding standard used for the primary language code (NHS_DATA_DICTIONARY_LANGUAGE_CODE).",
            ),
            Self::Primarylanguagedesc => ColumnInfo::new(
                "Primary Language Description",
                "Text description of the patient’s primary language.",
            ),
            Self::Death => ColumnInfo::new(
                "Deceased",
                "Indicates whether the patient is deceased.",
            ),
            Self::Persontocontactname => ColumnInfo::new(
                "Contact Person Name",
                "Name of the person to contact about the patient's care. This element should not be submitted without prior discussion with the UKRR.",
            ),
            Self::PersontocontactRelationship => ColumnInfo::new(
                "Contact Person Relationship",
                "Relationship of the contact person to the patient.",
            ),
            Self::PersontocontactContactnumber => ColumnInfo::new(
                "Contact Person Number",
                "Telephone number of the contact person.",
            ),
            Self::PersontocontactContactnumbertype => {
                ColumnInfo::new("Contact Number Type", "Type of contact number.")
            }
            Self::PersontocontactContactnumbercomments => ColumnInfo::new(
                "Contact Number Comments",
                "Additional comments related to the contact number.",
            ),
            Self::Updatedon => ColumnInfo::new("Updated On", "Last Modified Date"),
            Self::Actioncode => ColumnInfo::new(
                "Action Code",
                "Code representing the action performed on the patient record.",
            ),
            Self::Externalid => ColumnInfo::new("External ID", "Unique Identifier"),
            Self::Bloodgroup => ColumnInfo::new(
                "Blood Group",
                "Patient’s blood type, current, from NHS Data Dictionary (A, B, AB, 0).",
            ),
            Self::Bloodrhesus => ColumnInfo::new(
                "Blood Rhesus",
                "Patient’s blood rhesus, current, from NHS Data Dictionary (POS, NEG).",
            ),
            Self::UpdateDate => ColumnInfo::new(
                "Update Date",
                "Date and time when the record was last updated.",
            ),
        }
    }
}

aliases! {
    id => pid: String,
    birth_time => birthtime: Option<DateTime>,
    death_time => deathtime: Option<DateTime>,
    country_of_birth => countryofbirth: Option<String>,
    ethnic_group_code => ethnicgroupcode: Option<String>,
    ethnic_group_code_std => ethnicgroupcodestd: Option<String>,
    ethnic_group_description => ethnicgroupdesc: Option<String>,
    person_to_contact_name => persontocontactname: Option<String>,
    person_to_contact_number => persontocontact_contactnumber: Option<String>,
    person_to_contact_relationship => persontocontact_relationship: Option<String>,
    person_to_contact_number_comments => persontocontact_contactnumbercomments: Option<String>,
    person_to_contact_number_type => persontocontact_contactnumbertype: Option<String>,
    occupation_code => occupationcode: Option<String>,
    occupation_codestd => occupationcodestd: Option<String>,
    occupation_description => occupationdesc: Option<String>,
    primary_language => primarylanguagecode: Option<String>,
    primary_language_codestd => primarylanguagecodestd: Option<String>,
    primary_language_description => primarylanguagedesc: Option<String>,
    dead => death: Option<bool>,
    updated_on => updatedon: Option<DateTime>,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Patient({}) <{}>", self.pid, Opt(&self.birthtime))
    }
}

/// Organisations whose `NI` numbers count as national identifiers.
pub const NATIONAL_ID_ORGANIZATIONS: [&str; 3] = ["NHS", "CHI", "HSC"];

/// Organisation code used for local hospital numbers.
pub const LOCAL_HOSPITAL_ORGANIZATION: &str = "LOCALHOSP";

/// Main (legal, `nameuse == "L"`) name among `names`.
pub fn legal_name(names: &[name::Model]) -> Option<&name::Model> {
    names.iter().find(|n| n.nameuse.as_deref() == Some("L"))
}

fn first_ni_row(numbers: &[patient_number::Model]) -> Option<&patient_number::Model> {
    numbers.iter().find(|n| {
        n.numbertype.as_deref() == Some("NI")
            && n
                .organization
                .as_deref()
                .is_some_and(|org| NATIONAL_ID_ORGANIZATIONS.contains(&org))
    })
}

/// First NHS, CHI or HSC number.
///
/// Only the first matching row is considered, so a match without a
/// `patientid` yields `None` even when a later row has one.
pub fn first_ni_number(numbers: &[patient_number::Model]) -> Option<&str> {
    first_ni_row(numbers)?.patientid.as_deref()
}

/// [`first_ni_number`] paired with the issuing organisation.
pub fn first_ni_number_with_organization(
    numbers: &[patient_number::Model],
) -> Option<(&str, &str)> {
    let number = first_ni_row(numbers)?;
    Some((number.patientid.as_deref()?, number.organization.as_deref()?))
}

/// First local hospital (MRN) number. Like [`first_ni_number`], the first
/// matching row decides.
pub fn first_hospital_number(numbers: &[patient_number::Model]) -> Option<&str> {
    numbers
        .iter()
        .find(|n| {
            n.numbertype.as_deref() == Some("MRN")
                && n.organization.as_deref() == Some(LOCAL_HOSPITAL_ORGANIZATION)
        })?
        .patientid
        .as_deref()
}
