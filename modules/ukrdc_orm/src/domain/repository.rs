//! Repository traits for data access
//!
//! These traits define the read paths consumers use most often, plus the
//! cascading delete of a patient record. Implementations are in
//! infra/storage/repositories.rs

use async_trait::async_trait;

use crate::contract::{PatientDemographics, SchemaError};
use crate::infra::storage::entity::empi::{master_record, person, pid_xref, work_item};
use crate::infra::storage::entity::ukrdc::{lab_order, patient_record, result_item};

/// Repository over the UKRDC patient record aggregate
#[async_trait]
pub trait PatientRecordRepository: Send + Sync {
    /// Find a record by its pid
    async fn find_by_pid(&self, pid: &str) -> Result<Option<patient_record::Model>, SchemaError>;

    /// All records sharing a UKRDC ID
    async fn find_by_ukrdcid(
        &self,
        ukrdcid: &str,
    ) -> Result<Vec<patient_record::Model>, SchemaError>;

    /// Records holding a patient number, optionally restricted to one organisation
    async fn find_by_patient_number(
        &self,
        patientid: &str,
        organization: Option<&str>,
    ) -> Result<Vec<patient_record::Model>, SchemaError>;

    /// Patient row with its numbers and names
    async fn load_demographics(&self, pid: &str) -> Result<PatientDemographics, SchemaError>;

    /// Lab orders of a record, most recently collected first
    async fn lab_orders(&self, pid: &str) -> Result<Vec<lab_order::Model>, SchemaError>;

    /// Result items across every lab order of a record
    async fn result_items(&self, pid: &str) -> Result<Vec<result_item::Model>, SchemaError>;

    /// Delete a record and everything that depends on it, in one transaction.
    /// Returns the number of rows removed.
    async fn delete_cascade(&self, pid: &str) -> Result<u64, SchemaError>;
}

/// Repository over the JTRACE master patient index
#[async_trait]
pub trait EmpiRepository: Send + Sync {
    /// Master records carrying a national id, optionally of one type
    async fn find_master_records(
        &self,
        nationalid: &str,
        nationalid_type: Option<&str>,
    ) -> Result<Vec<master_record::Model>, SchemaError>;

    /// Persons linked to a master record
    async fn persons_for_master(&self, master_id: i32) -> Result<Vec<person::Model>, SchemaError>;

    /// Master records linked to a person
    async fn masters_for_person(
        &self,
        person_id: i32,
    ) -> Result<Vec<master_record::Model>, SchemaError>;

    /// Work items raised against a master record, optionally filtered by status
    async fn work_items_for_master(
        &self,
        master_id: i32,
        status: Option<i32>,
    ) -> Result<Vec<work_item::Model>, SchemaError>;

    /// Cross references pointing at a person's local id
    async fn xref_entries(&self, person_id: i32) -> Result<Vec<pid_xref::Model>, SchemaError>;
}
