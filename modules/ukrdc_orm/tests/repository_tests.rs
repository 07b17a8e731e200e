//! Integration tests for the SeaORM patient record repository

mod common;

use std::sync::Arc;

use common::{print_test_header, random_digits, seed_record, setup, timestamp, RecordFixture};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use ukrdc_orm::ukrdc::{
    address, code, family_doctor, lab_order, level, name, observation, patient, patient_number,
    patient_record, pv_data, pv_delete, question, result_item, score, survey, treatment,
};
use ukrdc_orm::{
    LogicalDatabase, PatientRecordRepository, SchemaError, SeaOrmPatientRecordRepository,
};

async fn repository() -> anyhow::Result<(Arc<DatabaseConnection>, SeaOrmPatientRecordRepository)> {
    let db = Arc::new(setup(LogicalDatabase::Ukrdc).await?);
    let repo = SeaOrmPatientRecordRepository::new(db.clone());
    Ok((db, repo))
}

/// Attaches one row of every dependant kind that the basic fixture lacks.
async fn add_dependants(db: &DatabaseConnection, fixture: &RecordFixture) -> anyhow::Result<()> {
    let pid = fixture.record.pid.clone();

    address::ActiveModel {
        id: Set(format!("{pid}-address-0")),
        pid: Set(Some(pid.clone())),
        postcode: Set(Some("BS1 1AA".to_owned())),
        ..Default::default()
    }
    .insert(db)
    .await?;

    family_doctor::ActiveModel {
        id: Set(pid.clone()),
        gpname: Set(Some("DR WHO".to_owned())),
        ..Default::default()
    }
    .insert(db)
    .await?;

    observation::ActiveModel {
        id: Set(format!("{pid}-obs-0")),
        pid: Set(Some(pid.clone())),
        observationtime: Set(Some(timestamp(2023, 5, 1))),
        ..Default::default()
    }
    .insert(db)
    .await?;

    treatment::ActiveModel {
        id: Set(format!("{pid}-treatment-0")),
        pid: Set(Some(pid.clone())),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let survey = survey::ActiveModel {
        id: Set(format!("{pid}-survey-0")),
        pid: Set(Some(pid.clone())),
        surveytime: Set(timestamp(2023, 4, 1)),
        ..Default::default()
    }
    .insert(db)
    .await?;
    question::ActiveModel {
        id: Set(format!("{pid}-question-0")),
        surveyid: Set(Some(survey.id.clone())),
        ..Default::default()
    }
    .insert(db)
    .await?;
    score::ActiveModel {
        id: Set(format!("{pid}-score-0")),
        surveyid: Set(Some(survey.id.clone())),
        ..Default::default()
    }
    .insert(db)
    .await?;
    level::ActiveModel {
        id: Set(format!("{pid}-level-0")),
        surveyid: Set(Some(survey.id.clone())),
        ..Default::default()
    }
    .insert(db)
    .await?;

    pv_data::ActiveModel {
        id: Set(pid.clone()),
        rrtstatus: Set(Some("HD".to_owned())),
        ..Default::default()
    }
    .insert(db)
    .await?;
    pv_delete::ActiveModel {
        pid: Set(Some(pid)),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(())
}

#[tokio::test]
async fn finds_records_by_pid_and_ukrdcid() -> anyhow::Result<()> {
    print_test_header(
        "finds_records_by_pid_and_ukrdcid",
        "records sharing a UKRDC ID are returned together",
    );
    let (db, repo) = repository().await?;
    let ukrdcid = random_digits(9);
    let first = seed_record(&db, &ukrdcid).await?;
    let second = seed_record(&db, &ukrdcid).await?;
    seed_record(&db, &random_digits(9)).await?;

    let found = repo.find_by_pid(&first.record.pid).await?;
    assert_eq!(found, Some(first.record.clone()));
    assert_eq!(repo.find_by_pid("no-such-pid").await?, None);

    let mut expected = vec![first.record.pid, second.record.pid];
    expected.sort();
    let pids: Vec<String> = repo
        .find_by_ukrdcid(&ukrdcid)
        .await?
        .into_iter()
        .map(|r| r.pid)
        .collect();
    assert_eq!(pids, expected);
    Ok(())
}

#[tokio::test]
async fn finds_records_by_patient_number() -> anyhow::Result<()> {
    let (db, repo) = repository().await?;
    let fixture = seed_record(&db, &random_digits(9)).await?;
    seed_record(&db, &random_digits(9)).await?;

    let by_number = repo.find_by_patient_number(&fixture.nhs_number, None).await?;
    assert_eq!(by_number, vec![fixture.record.clone()]);

    let by_org = repo
        .find_by_patient_number(&fixture.nhs_number, Some("NHS"))
        .await?;
    assert_eq!(by_org.len(), 1);

    let wrong_org = repo
        .find_by_patient_number(&fixture.nhs_number, Some("CHI"))
        .await?;
    assert!(wrong_org.is_empty());
    Ok(())
}

#[tokio::test]
async fn loads_demographics() -> anyhow::Result<()> {
    let (db, repo) = repository().await?;
    let fixture = seed_record(&db, &random_digits(9)).await?;

    let demographics = repo.load_demographics(&fixture.record.pid).await?;
    assert_eq!(demographics.patient, fixture.patient);
    assert_eq!(
        demographics.name().and_then(|n| n.family.as_deref()),
        Some("Smith")
    );
    assert_eq!(
        demographics.first_ni_number(),
        Some(fixture.nhs_number.as_str())
    );
    assert_eq!(
        demographics.first_ni_number_with_organization(),
        Some((fixture.nhs_number.as_str(), "NHS"))
    );
    assert_eq!(demographics.first_hospital_number(), None);

    let missing = repo.load_demographics("no-such-pid").await;
    assert!(matches!(missing, Err(SchemaError::NotFound { .. })));
    Ok(())
}

#[tokio::test]
async fn lab_orders_are_newest_first() -> anyhow::Result<()> {
    let (db, repo) = repository().await?;
    let fixture = seed_record(&db, &random_digits(9)).await?;
    let pid = fixture.record.pid.clone();

    lab_order::ActiveModel {
        id: Set(format!("{pid}-order-1")),
        pid: Set(Some(pid.clone())),
        specimencollectedtime: Set(Some(timestamp(2024, 1, 1))),
        ..Default::default()
    }
    .insert(&*db)
    .await?;

    let orders = repo.lab_orders(&pid).await?;
    let ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec![format!("{pid}-order-1"), fixture.order.id.clone()]);
    Ok(())
}

#[tokio::test]
async fn result_items_span_orders_and_require_record() -> anyhow::Result<()> {
    let (db, repo) = repository().await?;
    let fixture = seed_record(&db, &random_digits(9)).await?;

    let items = repo.result_items(&fixture.record.pid).await?;
    assert_eq!(items.len(), fixture.results.len());
    assert!(items
        .iter()
        .all(|item| item.orderid.as_deref() == Some(fixture.order.id.as_str())));

    let missing = repo.result_items("no-such-pid").await;
    assert!(matches!(missing, Err(SchemaError::NotFound { .. })));
    Ok(())
}

#[tokio::test]
async fn delete_cascade_removes_only_the_target_record() -> anyhow::Result<()> {
    print_test_header(
        "delete_cascade_removes_only_the_target_record",
        "every dependant of the pid goes; other records and code lists stay",
    );
    let (db, repo) = repository().await?;
    let target = seed_record(&db, &random_digits(9)).await?;
    add_dependants(&db, &target).await?;
    let bystander = seed_record(&db, &random_digits(9)).await?;
    add_dependants(&db, &bystander).await?;

    code::ActiveModel {
        coding_standard: Set("PV_RRTSTATUS".to_owned()),
        code: Set("HD".to_owned()),
        ..Default::default()
    }
    .insert(&*db)
    .await?;

    let deleted = repo.delete_cascade(&target.record.pid).await?;
    // record, patient, name, number, order, two results, address, family
    // doctor, observation, treatment, survey, question, score, level,
    // pvdata, pvdelete
    assert_eq!(deleted, 17);

    let pid = target.record.pid.as_str();
    assert_eq!(repo.find_by_pid(pid).await?, None);
    assert_eq!(patient::Entity::find_by_id(pid).one(&*db).await?, None);
    assert_eq!(pv_data::Entity::find_by_id(pid).one(&*db).await?, None);
    assert_eq!(family_doctor::Entity::find_by_id(pid).one(&*db).await?, None);
    assert_eq!(
        name::Entity::find()
            .filter(name::Column::Pid.eq(pid))
            .count(&*db)
            .await?,
        0
    );
    assert_eq!(
        patient_number::Entity::find()
            .filter(patient_number::Column::Pid.eq(pid))
            .count(&*db)
            .await?,
        0
    );

    // The bystander keeps all of its rows.
    assert_eq!(patient_record::Entity::find().count(&*db).await?, 1);
    assert_eq!(result_item::Entity::find().count(&*db).await?, 2);
    assert_eq!(question::Entity::find().count(&*db).await?, 1);
    assert_eq!(score::Entity::find().count(&*db).await?, 1);
    assert_eq!(level::Entity::find().count(&*db).await?, 1);
    assert_eq!(pv_delete::Entity::find().count(&*db).await?, 1);
    assert_eq!(
        repo.result_items(&bystander.record.pid).await?.len(),
        bystander.results.len()
    );
    assert_eq!(code::Entity::find().count(&*db).await?, 1);
    Ok(())
}

#[tokio::test]
async fn delete_cascade_of_missing_record_is_not_found() -> anyhow::Result<()> {
    let (_db, repo) = repository().await?;
    let result = repo.delete_cascade("no-such-pid").await;
    assert!(matches!(result, Err(SchemaError::NotFound { .. })));
    Ok(())
}
