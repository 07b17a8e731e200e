//! Aggregates returned by the repositories

use crate::infra::storage::entity::ukrdc::{name, patient, patient_number};

/// A patient together with their identifiers and names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientDemographics {
    pub patient: patient::Model,
    pub numbers: Vec<patient_number::Model>,
    pub names: Vec<name::Model>,
}

impl PatientDemographics {
    /// The legal name, if one was sent.
    pub fn name(&self) -> Option<&name::Model> {
        patient::legal_name(&self.names)
    }

    pub fn first_ni_number(&self) -> Option<&str> {
        patient::first_ni_number(&self.numbers)
    }

    /// `(patientid, organization)` of the first national identifier.
    pub fn first_ni_number_with_organization(&self) -> Option<(&str, &str)> {
        patient::first_ni_number_with_organization(&self.numbers)
    }

    pub fn first_hospital_number(&self) -> Option<&str> {
        patient::first_hospital_number(&self.numbers)
    }
}
