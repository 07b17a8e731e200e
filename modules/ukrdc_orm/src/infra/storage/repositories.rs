//! SeaORM repository implementations

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Query;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::{debug, info};

use super::entity::empi::{master_record, person, pid_xref, work_item};
use super::entity::ukrdc::*;
use crate::contract::{PatientDemographics, SchemaError};
use crate::domain::repository::{EmpiRepository, PatientRecordRepository};

// ===== Patient Record Repository =====

pub struct SeaOrmPatientRecordRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmPatientRecordRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn require_record(&self, pid: &str) -> Result<patient_record::Model, SchemaError> {
        patient_record::Entity::find_by_id(pid)
            .one(&*self.db)
            .await?
            .ok_or_else(|| SchemaError::not_found("patientrecord", pid))
    }
}

#[async_trait]
impl PatientRecordRepository for SeaOrmPatientRecordRepository {
    async fn find_by_pid(&self, pid: &str) -> Result<Option<patient_record::Model>, SchemaError> {
        Ok(patient_record::Entity::find_by_id(pid).one(&*self.db).await?)
    }

    async fn find_by_ukrdcid(
        &self,
        ukrdcid: &str,
    ) -> Result<Vec<patient_record::Model>, SchemaError> {
        let records = patient_record::Entity::find()
            .filter(patient_record::Column::Ukrdcid.eq(ukrdcid))
            .order_by_asc(patient_record::Column::Pid)
            .all(&*self.db)
            .await?;
        Ok(records)
    }

    async fn find_by_patient_number(
        &self,
        patientid: &str,
        organization: Option<&str>,
    ) -> Result<Vec<patient_record::Model>, SchemaError> {
        let mut pids = Query::select();
        pids.column(patient_number::Column::Pid)
            .from(patient_number::Entity)
            .and_where(patient_number::Column::Patientid.eq(patientid));
        if let Some(org) = organization {
            pids.and_where(patient_number::Column::Organization.eq(org));
        }

        let records = patient_record::Entity::find()
            .filter(patient_record::Column::Pid.in_subquery(pids.to_owned()))
            .order_by_asc(patient_record::Column::Pid)
            .all(&*self.db)
            .await?;
        Ok(records)
    }

    async fn load_demographics(&self, pid: &str) -> Result<PatientDemographics, SchemaError> {
        let patient = patient::Entity::find_by_id(pid)
            .one(&*self.db)
            .await?
            .ok_or_else(|| SchemaError::not_found("patient", pid))?;

        let numbers = patient
            .find_related(patient_number::Entity)
            .order_by_asc(patient_number::Column::Idx)
            .order_by_asc(patient_number::Column::Id)
            .all(&*self.db)
            .await?;
        let names = patient
            .find_related(name::Entity)
            .order_by_asc(name::Column::Idx)
            .order_by_asc(name::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(PatientDemographics {
            patient,
            numbers,
            names,
        })
    }

    async fn lab_orders(&self, pid: &str) -> Result<Vec<lab_order::Model>, SchemaError> {
        let orders = lab_order::Entity::find()
            .filter(lab_order::Column::Pid.eq(pid))
            .order_by_desc(lab_order::Column::Specimencollectedtime)
            .order_by_asc(lab_order::Column::Id)
            .all(&*self.db)
            .await?;
        Ok(orders)
    }

    async fn result_items(&self, pid: &str) -> Result<Vec<result_item::Model>, SchemaError> {
        let record = self.require_record(pid).await?;
        let items = record
            .find_linked(patient_record::ResultItems)
            .order_by_asc(result_item::Column::Id)
            .all(&*self.db)
            .await?;
        Ok(items)
    }

    async fn delete_cascade(&self, pid: &str) -> Result<u64, SchemaError> {
        let txn = self.db.begin().await?;

        // Dropping `txn` without commit rolls back.
        let record = patient_record::Entity::find_by_id(pid)
            .one(&txn)
            .await?
            .ok_or_else(|| SchemaError::not_found("patientrecord", pid))?;

        let mut deleted = 0;

        macro_rules! delete_where {
            ($module:ident :: $column:ident) => {
                deleted += $module::Entity::delete_many()
                    .filter($module::Column::$column.eq(pid))
                    .exec(&txn)
                    .await?
                    .rows_affected;
            };
        }

        // Grandchildren first: they only reference their parents, not the pid.
        let orders = Query::select()
            .column(lab_order::Column::Id)
            .from(lab_order::Entity)
            .and_where(lab_order::Column::Pid.eq(pid))
            .to_owned();
        deleted += result_item::Entity::delete_many()
            .filter(result_item::Column::Orderid.in_subquery(orders))
            .exec(&txn)
            .await?
            .rows_affected;

        let surveys = Query::select()
            .column(survey::Column::Id)
            .from(survey::Entity)
            .and_where(survey::Column::Pid.eq(pid))
            .to_owned();
        deleted += question::Entity::delete_many()
            .filter(question::Column::Surveyid.in_subquery(surveys.clone()))
            .exec(&txn)
            .await?
            .rows_affected;
        deleted += score::Entity::delete_many()
            .filter(score::Column::Surveyid.in_subquery(surveys.clone()))
            .exec(&txn)
            .await?
            .rows_affected;
        deleted += level::Entity::delete_many()
            .filter(level::Column::Surveyid.in_subquery(surveys))
            .exec(&txn)
            .await?
            .rows_affected;

        delete_where!(name::Pid);
        delete_where!(patient_number::Pid);
        delete_where!(address::Pid);
        delete_where!(contact_detail::Pid);
        delete_where!(family_doctor::Id);
        delete_where!(patient::Pid);

        delete_where!(lab_order::Pid);
        delete_where!(survey::Pid);
        delete_where!(observation::Pid);
        delete_where!(social_history::Pid);
        delete_where!(family_history::Pid);
        delete_where!(allergy::Pid);
        delete_where!(diagnosis::Pid);
        delete_where!(cause_of_death::Pid);
        delete_where!(renal_diagnosis::Pid);
        delete_where!(medication::Pid);
        delete_where!(dialysis_session::Pid);
        delete_where!(vascular_access::Pid);
        delete_where!(procedure::Pid);
        delete_where!(document::Pid);
        delete_where!(encounter::Pid);
        delete_where!(transplant_list::Pid);
        delete_where!(treatment::Pid);
        delete_where!(program_membership::Pid);
        delete_where!(transplant::Pid);
        delete_where!(opt_out::Pid);
        delete_where!(clinical_relationship::Pid);
        delete_where!(pv_delete::Pid);
        delete_where!(pv_data::Id);

        deleted += record.delete(&txn).await?.rows_affected;
        txn.commit().await?;

        info!(pid, rows = deleted, "deleted patient record");
        Ok(deleted)
    }
}

// ===== EMPI Repository =====

pub struct SeaOrmEmpiRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmEmpiRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmpiRepository for SeaOrmEmpiRepository {
    async fn find_master_records(
        &self,
        nationalid: &str,
        nationalid_type: Option<&str>,
    ) -> Result<Vec<master_record::Model>, SchemaError> {
        let mut query =
            master_record::Entity::find().filter(master_record::Column::Nationalid.eq(nationalid));
        if let Some(kind) = nationalid_type {
            query = query.filter(master_record::Column::NationalidType.eq(kind));
        }

        let records = query
            .order_by_asc(master_record::Column::Id)
            .all(&*self.db)
            .await?;
        debug!(nationalid, found = records.len(), "master record lookup");
        Ok(records)
    }

    async fn persons_for_master(&self, master_id: i32) -> Result<Vec<person::Model>, SchemaError> {
        let master = master_record::Entity::find_by_id(master_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| SchemaError::not_found("masterrecord", master_id.to_string()))?;

        let persons = master
            .find_related(person::Entity)
            .order_by_asc(person::Column::Id)
            .all(&*self.db)
            .await?;
        Ok(persons)
    }

    async fn masters_for_person(
        &self,
        person_id: i32,
    ) -> Result<Vec<master_record::Model>, SchemaError> {
        let person = person::Entity::find_by_id(person_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| SchemaError::not_found("person", person_id.to_string()))?;

        let masters = person
            .find_related(master_record::Entity)
            .order_by_asc(master_record::Column::Id)
            .all(&*self.db)
            .await?;
        Ok(masters)
    }

    async fn work_items_for_master(
        &self,
        master_id: i32,
        status: Option<i32>,
    ) -> Result<Vec<work_item::Model>, SchemaError> {
        let mut query =
            work_item::Entity::find().filter(work_item::Column::MasterId.eq(master_id));
        if let Some(status) = status {
            query = query.filter(work_item::Column::Status.eq(status));
        }

        let items = query
            .order_by_asc(work_item::Column::Id)
            .all(&*self.db)
            .await?;
        Ok(items)
    }

    async fn xref_entries(&self, person_id: i32) -> Result<Vec<pid_xref::Model>, SchemaError> {
        let person = person::Entity::find_by_id(person_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| SchemaError::not_found("person", person_id.to_string()))?;

        let entries = person
            .find_related(pid_xref::Entity)
            .order_by_asc(pid_xref::Column::Id)
            .all(&*self.db)
            .await?;
        Ok(entries)
    }
}
