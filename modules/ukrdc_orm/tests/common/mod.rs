//! Common test utilities: in-memory databases and patient record fixtures
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rand::Rng;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use ukrdc_orm::ukrdc::{lab_order, name, patient, patient_number, patient_record, result_item};
use ukrdc_orm::{connect, migrate, DatabaseConfig, LogicalDatabase, MigrationCommand};

/// Opens a single-connection in-memory SQLite database with `database`'s schema applied.
///
/// SQLite keeps one in-memory database per connection, so the pool is pinned to one.
pub async fn setup(database: LogicalDatabase) -> anyhow::Result<DatabaseConnection> {
    let mut config = DatabaseConfig::new("sqlite::memory:");
    config.max_connections = 1;
    config.min_connections = 1;

    let db = connect(&config).await?;
    migrate(&db, database, MigrationCommand::Up).await?;
    Ok(db)
}

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}

pub fn timestamp(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap_or_default()
}

/// Random string of `len` decimal digits, used for pids and identifiers.
pub fn random_digits(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

/// Random NHS-number-shaped identifier.
pub fn random_nhs_number() -> String {
    format!("9{}", random_digits(9))
}

pub fn patient_record(pid: &str, ukrdcid: &str) -> patient_record::ActiveModel {
    patient_record::ActiveModel {
        pid: Set(pid.to_owned()),
        sendingfacility: Set("RXF01".to_owned()),
        sendingextract: Set("UKRDC".to_owned()),
        localpatientid: Set(random_digits(8)),
        repositorycreationdate: Set(timestamp(2023, 1, 1)),
        repositoryupdatedate: Set(timestamp(2023, 1, 2)),
        ukrdcid: Set(Some(ukrdcid.to_owned())),
        ..Default::default()
    }
}

/// A fully populated record: demographics, one name, one NHS number, and one
/// lab order carrying two result items.
pub struct RecordFixture {
    pub record: patient_record::Model,
    pub patient: patient::Model,
    pub nhs_number: String,
    pub order: lab_order::Model,
    pub results: Vec<result_item::Model>,
}

pub async fn seed_record(db: &DatabaseConnection, ukrdcid: &str) -> anyhow::Result<RecordFixture> {
    let pid = random_digits(9);
    let record = patient_record(&pid, ukrdcid).insert(db).await?;

    let patient = patient::ActiveModel {
        pid: Set(pid.clone()),
        birthtime: Set(Some(timestamp(1970, 6, 15))),
        gender: Set(Some("2".to_owned())),
        ..Default::default()
    }
    .insert(db)
    .await?;

    name::ActiveModel {
        id: Set(format!("{pid}-name-0")),
        pid: Set(Some(pid.clone())),
        idx: Set(Some(0)),
        nameuse: Set(Some("L".to_owned())),
        given: Set(Some("Jane".to_owned())),
        family: Set(Some("Smith".to_owned())),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let nhs_number = random_nhs_number();
    patient_number::ActiveModel {
        id: Set(format!("{pid}-number-0")),
        pid: Set(Some(pid.clone())),
        idx: Set(Some(0)),
        patientid: Set(Some(nhs_number.clone())),
        numbertype: Set(Some("NI".to_owned())),
        organization: Set(Some("NHS".to_owned())),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let order = lab_order::ActiveModel {
        id: Set(format!("{pid}-order-0")),
        pid: Set(Some(pid.clone())),
        specimencollectedtime: Set(Some(timestamp(2023, 3, 1))),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let mut results = Vec::new();
    for (code, value) in [("CREATININE", "120"), ("POTASSIUM", "4.5")] {
        let item = result_item::ActiveModel {
            id: Set(format!("{}-{}", order.id, code)),
            orderid: Set(Some(order.id.clone())),
            serviceidcode: Set(Some(code.to_owned())),
            serviceidcodestd: Set(Some("UKRR".to_owned())),
            resultvalue: Set(Some(value.to_owned())),
            ..Default::default()
        }
        .insert(db)
        .await?;
        results.push(item);
    }

    Ok(RecordFixture {
        record,
        patient,
        nhs_number,
        order,
        results,
    })
}
