//! Integration tests for the JTRACE master patient index

mod common;

use std::sync::Arc;

use chrono::NaiveDate;
use common::{print_test_header, random_digits, random_nhs_number, setup, timestamp};
use sea_orm::{ActiveModelTrait, DatabaseConnection, ModelTrait, Set};
use ukrdc_orm::empi::{audit, link_record, master_record, person, pid_xref, work_item};
use ukrdc_orm::{EmpiRepository, LogicalDatabase, SchemaError, SeaOrmEmpiRepository};

fn dob() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 6, 15).unwrap_or_default()
}

async fn master(
    db: &DatabaseConnection,
    nationalid: &str,
    nationalid_type: &str,
) -> anyhow::Result<master_record::Model> {
    Ok(master_record::ActiveModel {
        last_updated: Set(timestamp(2023, 1, 1)),
        date_of_birth: Set(dob()),
        givenname: Set(Some("JANE".to_owned())),
        surname: Set(Some("SMITH".to_owned())),
        nationalid: Set(nationalid.to_owned()),
        nationalid_type: Set(nationalid_type.to_owned()),
        status: Set(0),
        effective_date: Set(timestamp(2023, 1, 1)),
        ..Default::default()
    }
    .insert(db)
    .await?)
}

async fn person(
    db: &DatabaseConnection,
    originator: &str,
    localid: &str,
) -> anyhow::Result<person::Model> {
    Ok(person::ActiveModel {
        originator: Set(originator.to_owned()),
        localid: Set(localid.to_owned()),
        localid_type: Set("CLPID".to_owned()),
        date_of_birth: Set(dob()),
        gender: Set("2".to_owned()),
        givenname: Set(Some("JANE".to_owned())),
        surname: Set(Some("SMITH".to_owned())),
        ..Default::default()
    }
    .insert(db)
    .await?)
}

async fn link(
    db: &DatabaseConnection,
    person: &person::Model,
    master: &master_record::Model,
) -> anyhow::Result<link_record::Model> {
    Ok(link_record::ActiveModel {
        person_id: Set(person.id),
        master_id: Set(master.id),
        link_type: Set(0),
        link_code: Set(0),
        last_updated: Set(timestamp(2023, 1, 1)),
        ..Default::default()
    }
    .insert(db)
    .await?)
}

#[tokio::test]
async fn persons_and_masters_link_both_ways() -> anyhow::Result<()> {
    print_test_header(
        "persons_and_masters_link_both_ways",
        "masterrecord <-> person resolves through linkrecord in either direction",
    );
    let db = Arc::new(setup(LogicalDatabase::Empi).await?);
    let repo = SeaOrmEmpiRepository::new(db.clone());

    let nhs = random_nhs_number();
    let ukrdc = master(&db, &random_digits(9), "UKRDC").await?;
    let national = master(&db, &nhs, "NHS").await?;
    let renal = person(&db, "UKRDC", &random_digits(9)).await?;
    let hospital = person(&db, "RXF01", &random_digits(9)).await?;

    link(&db, &renal, &ukrdc).await?;
    link(&db, &renal, &national).await?;
    let hospital_link = link(&db, &hospital, &national).await?;
    assert_eq!(
        hospital_link.to_string(),
        format!(
            "LinkRecord({}) <Person({}), Master({})>",
            hospital_link.id, hospital.id, national.id
        )
    );

    let persons = repo.persons_for_master(national.id).await?;
    assert_eq!(persons, vec![renal.clone(), hospital.clone()]);

    let masters = repo.masters_for_person(renal.id).await?;
    assert_eq!(masters, vec![ukrdc.clone(), national.clone()]);

    let via_model = hospital.find_related(master_record::Entity).all(&*db).await?;
    assert_eq!(via_model, vec![national]);
    Ok(())
}

#[tokio::test]
async fn master_records_filter_by_national_id_type() -> anyhow::Result<()> {
    let db = Arc::new(setup(LogicalDatabase::Empi).await?);
    let repo = SeaOrmEmpiRepository::new(db.clone());

    let shared = random_digits(10);
    let nhs = master(&db, &shared, "NHS").await?;
    let chi = master(&db, &shared, "CHI").await?;
    master(&db, &random_digits(10), "NHS").await?;

    assert_eq!(repo.find_master_records(&shared, None).await?, vec![nhs.clone(), chi]);
    assert_eq!(
        repo.find_master_records(&shared, Some("NHS")).await?,
        vec![nhs.clone()]
    );
    assert!(repo.find_master_records("0000000000", None).await?.is_empty());

    assert_eq!(
        nhs.to_string(),
        format!("MasterRecord({}) <JANE SMITH 1970-06-15 NHS:{}>", nhs.id, shared)
    );
    Ok(())
}

#[tokio::test]
async fn work_items_filter_by_status() -> anyhow::Result<()> {
    print_test_header(
        "work_items_filter_by_status",
        "work items hang off a master and can be narrowed to one status",
    );
    let db = Arc::new(setup(LogicalDatabase::Empi).await?);
    let repo = SeaOrmEmpiRepository::new(db.clone());

    let master = master(&db, &random_nhs_number(), "NHS").await?;
    let person = person(&db, "RXF01", &random_digits(9)).await?;

    let mut open = Vec::new();
    for (kind, status) in [(9, 1), (7, 1), (9, 3)] {
        let item = work_item::ActiveModel {
            person_id: Set(person.id),
            master_id: Set(master.id),
            r#type: Set(kind),
            description: Set(format!("demographics mismatch ({kind})")),
            status: Set(status),
            last_updated: Set(timestamp(2023, 6, 1)),
            ..Default::default()
        }
        .insert(&*db)
        .await?;
        if status == 1 {
            open.push(item);
        }
    }

    assert_eq!(repo.work_items_for_master(master.id, None).await?.len(), 3);
    assert_eq!(repo.work_items_for_master(master.id, Some(1)).await?, open);
    assert!(repo
        .work_items_for_master(master.id, Some(2))
        .await?
        .is_empty());

    let from_person = person.find_related(work_item::Entity).all(&*db).await?;
    assert_eq!(from_person.len(), 3);
    Ok(())
}

#[tokio::test]
async fn xref_entries_follow_person_localid() -> anyhow::Result<()> {
    let db = Arc::new(setup(LogicalDatabase::Empi).await?);
    let repo = SeaOrmEmpiRepository::new(db.clone());

    let localid = random_digits(9);
    let person = person(&db, "UKRDC", &localid).await?;
    let other = person_with_xref(&db).await?;

    let entry = pid_xref::ActiveModel {
        pid: Set(localid.clone()),
        sending_facility: Set("RXF01".to_owned()),
        sending_extract: Set("UKRDC".to_owned()),
        localid: Set(random_digits(8)),
        ..Default::default()
    }
    .insert(&*db)
    .await?;

    assert_eq!(repo.xref_entries(person.id).await?, vec![entry]);
    assert_eq!(repo.xref_entries(other.id).await?.len(), 1);

    let missing = repo.xref_entries(-1).await;
    assert!(matches!(missing, Err(SchemaError::NotFound { .. })));
    let missing = repo.persons_for_master(-1).await;
    assert!(matches!(missing, Err(SchemaError::NotFound { .. })));
    Ok(())
}

async fn person_with_xref(db: &DatabaseConnection) -> anyhow::Result<person::Model> {
    let localid = random_digits(9);
    let person = person(db, "UKRDC", &localid).await?;
    pid_xref::ActiveModel {
        pid: Set(localid),
        sending_facility: Set("RAJ01".to_owned()),
        sending_extract: Set("PV".to_owned()),
        localid: Set(random_digits(8)),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(person)
}

#[tokio::test]
async fn unique_indexes_reject_duplicates() -> anyhow::Result<()> {
    print_test_header(
        "unique_indexes_reject_duplicates",
        "person MRN and pidxref compound keys are unique",
    );
    let db = setup(LogicalDatabase::Empi).await?;

    let localid = random_digits(9);
    person(&db, "RXF01", &localid).await?;
    assert!(person(&db, "RXF01", &localid).await.is_err());

    let xref = || pid_xref::ActiveModel {
        pid: Set(localid.clone()),
        sending_facility: Set("RXF01".to_owned()),
        sending_extract: Set("UKRDC".to_owned()),
        localid: Set("123".to_owned()),
        ..Default::default()
    };
    xref().insert(&db).await?;
    assert!(xref().insert(&db).await.is_err());

    // A cross reference must point at a known person.
    let dangling = pid_xref::ActiveModel {
        pid: Set("not-a-person".to_owned()),
        sending_facility: Set("RXF01".to_owned()),
        sending_extract: Set("UKRDC".to_owned()),
        localid: Set("456".to_owned()),
        ..Default::default()
    }
    .insert(&db)
    .await;
    assert!(dangling.is_err());
    Ok(())
}

#[tokio::test]
async fn audit_rows_are_free_standing() -> anyhow::Result<()> {
    let db = setup(LogicalDatabase::Empi).await?;

    let entry = audit::ActiveModel {
        person_id: Set(42),
        master_id: Set(7),
        r#type: Set(1),
        description: Set("Record merged".to_owned()),
        main_nationalid: Set(Some(random_nhs_number())),
        main_nationalid_type: Set(Some("NHS".to_owned())),
        last_updated: Set(timestamp(2023, 7, 1)),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    assert!(entry.id > 0);
    assert_eq!(entry.description, "Record merged");
    Ok(())
}
