//! Integration tests for the UKRDC clinical schema

mod common;

use chrono::NaiveDate;
use common::{print_test_header, random_digits, seed_record, setup, timestamp};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, PaginatorTrait, Set};
use ukrdc_orm::ukrdc::{
    allergy, cause_of_death, clinical_relationship, code, code_exclusion, code_map,
    contact_detail, dialysis_session, document, encounter, event_control, facility_relationship,
    family_doctor, family_history, file, gp_info, locations, medication, modality_codes, name,
    opt_out, patient, patient_number, patient_record, pkb_link, procedure, program_membership,
    pv_data, pv_delete, renal_diagnosis, result_item, rr_codes, rr_data_definition,
    satellite_map, score, social_history, survey, transplant, transplant_list, treatment,
    validation_error, value_exclusion, vascular_access,
};
use ukrdc_orm::LogicalDatabase;

#[tokio::test]
async fn record_defaults_are_applied_by_the_database() -> anyhow::Result<()> {
    print_test_header(
        "record_defaults_are_applied_by_the_database",
        "creation_date and migrated are filled in when omitted",
    );
    let db = setup(LogicalDatabase::Ukrdc).await?;
    let fixture = seed_record(&db, &random_digits(9)).await?;

    let stored = patient_record::Entity::find_by_id(fixture.record.pid.clone())
        .one(&db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("record missing"))?;

    assert!(!stored.migrated);
    assert!(stored.creation_date.and_utc().timestamp() > 0);
    assert_eq!(stored.update_date, None);
    assert_eq!(stored.sendingfacility, "RXF01");
    Ok(())
}

#[tokio::test]
async fn record_navigates_to_demographics() -> anyhow::Result<()> {
    print_test_header(
        "record_navigates_to_demographics",
        "patientrecord -> patient -> name/patientnumber relationships resolve",
    );
    let db = setup(LogicalDatabase::Ukrdc).await?;
    let fixture = seed_record(&db, &random_digits(9)).await?;

    let patient = fixture
        .record
        .find_related(patient::Entity)
        .one(&db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("patient missing"))?;
    assert_eq!(patient, fixture.patient);

    let names = patient.find_related(name::Entity).all(&db).await?;
    assert_eq!(names.len(), 1);
    assert_eq!(names[0].to_string(), format!("Name({}) <Jane Smith>", patient.pid));

    let numbers = patient.find_related(patient_number::Entity).all(&db).await?;
    assert_eq!(numbers.len(), 1);
    assert_eq!(
        numbers[0].to_string(),
        format!("PatientNumber({}) <NHS:NI:{}>", patient.pid, fixture.nhs_number)
    );
    Ok(())
}

#[tokio::test]
async fn result_items_are_reachable_through_lab_orders() -> anyhow::Result<()> {
    print_test_header(
        "result_items_are_reachable_through_lab_orders",
        "the record -> laborder -> resultitem link returns every item",
    );
    let db = setup(LogicalDatabase::Ukrdc).await?;
    let fixture = seed_record(&db, &random_digits(9)).await?;
    // A second record must not leak into the first one's results.
    seed_record(&db, &random_digits(9)).await?;

    let mut items = fixture
        .record
        .find_linked(patient_record::ResultItems)
        .all(&db)
        .await?;
    items.sort_by(|a, b| a.id.cmp(&b.id));

    let mut expected = fixture.results.clone();
    expected.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(items, expected);

    let pid = items[0].pid(&db).await?;
    assert_eq!(pid.as_deref(), Some(fixture.record.pid.as_str()));
    Ok(())
}

#[tokio::test]
async fn result_item_without_order_has_no_pid() -> anyhow::Result<()> {
    let db = setup(LogicalDatabase::Ukrdc).await?;
    let orphan = result_item::ActiveModel {
        id: Set(random_digits(12)),
        resultvalue: Set(Some("7".to_owned())),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    assert_eq!(orphan.pid(&db).await?, None);
    Ok(())
}

#[tokio::test]
async fn code_lookups_describe_coded_fields() -> anyhow::Result<()> {
    print_test_header(
        "code_lookups_describe_coded_fields",
        "treatment and pvdata codes resolve against code_list",
    );
    let db = setup(LogicalDatabase::Ukrdc).await?;
    let fixture = seed_record(&db, &random_digits(9)).await?;
    let pid = fixture.record.pid.clone();

    for (standard, value, description) in [
        ("CF_RR7_TREATMENT", "1", "Haemodialysis"),
        ("CF_RR7_DISCHARGE", "38", "Transferred out"),
        (pv_data::RRT_STATUS_STANDARD, "HD", "Haemodialysis"),
    ] {
        code::ActiveModel {
            coding_standard: Set(standard.to_owned()),
            code: Set(value.to_owned()),
            description: Set(Some(description.to_owned())),
            ..Default::default()
        }
        .insert(&db)
        .await?;
    }

    let treatment = treatment::ActiveModel {
        id: Set(format!("{pid}-treatment-0")),
        pid: Set(Some(pid.clone())),
        admitreasoncode: Set(Some("1".to_owned())),
        admitreasoncodestd: Set(Some("CF_RR7_TREATMENT".to_owned())),
        dischargereasoncode: Set(Some("38".to_owned())),
        dischargereasoncodestd: Set(Some("CF_RR7_DISCHARGE".to_owned())),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    assert_eq!(
        treatment.admit_reason_desc(&db).await?.as_deref(),
        Some("Haemodialysis")
    );
    assert_eq!(
        treatment.discharge_reason_desc(&db).await?.as_deref(),
        Some("Transferred out")
    );

    let linked = treatment
        .find_linked(treatment::AdmitReasonCode)
        .one(&db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("admit reason code missing"))?;
    assert_eq!(linked.code, "1");

    let pv = pv_data::ActiveModel {
        id: Set(pid.clone()),
        rrtstatus: Set(Some("HD".to_owned())),
        tpstatus: Set(Some("UNKNOWN".to_owned())),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    assert_eq!(pv.rrtstatus_desc(&db).await?.as_deref(), Some("Haemodialysis"));
    assert_eq!(pv.tpstatus_desc(&db).await?, None);

    let from_record = fixture
        .record
        .find_related(pv_data::Entity)
        .one(&db)
        .await?;
    assert_eq!(from_record, Some(pv));
    Ok(())
}

#[tokio::test]
async fn uncoded_fields_describe_as_none() -> anyhow::Result<()> {
    let db = setup(LogicalDatabase::Ukrdc).await?;
    assert_eq!(code::describe(&db, None, Some("1")).await?, None);
    assert_eq!(code::describe(&db, Some("CF_RR7_TREATMENT"), None).await?, None);
    assert_eq!(
        code::describe(&db, Some("CF_RR7_TREATMENT"), Some("missing")).await?,
        None
    );
    Ok(())
}

#[tokio::test]
async fn family_doctor_resolves_gp_and_practice() -> anyhow::Result<()> {
    print_test_header(
        "family_doctor_resolves_gp_and_practice",
        "familydoctor.gpid and gppracticeid both reference the ODS GP register",
    );
    let db = setup(LogicalDatabase::Ukrdc).await?;
    let fixture = seed_record(&db, &random_digits(9)).await?;

    let gp = gp_info::ActiveModel {
        code: Set("G1234567".to_owned()),
        name: Set(Some("DR A GP".to_owned())),
        r#type: Set(Some(gp_info::GpType::Gp)),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    let practice = gp_info::ActiveModel {
        code: Set("P12345".to_owned()),
        name: Set(Some("THE SURGERY".to_owned())),
        r#type: Set(Some(gp_info::GpType::Practice)),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let doctor = family_doctor::ActiveModel {
        id: Set(fixture.patient.pid.clone()),
        gpid: Set(Some(gp.code.clone())),
        gppracticeid: Set(Some(practice.code.clone())),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    assert_eq!(doctor.gp_info(&db).await?, Some(gp));
    let stored_practice = doctor
        .gp_practice_info(&db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("practice missing"))?;
    assert_eq!(stored_practice.r#type, Some(gp_info::GpType::Practice));

    let via_patient = fixture
        .patient
        .find_related(family_doctor::Entity)
        .one(&db)
        .await?;
    assert_eq!(via_patient, Some(doctor));
    Ok(())
}

#[tokio::test]
async fn family_doctor_rejects_unknown_gp() -> anyhow::Result<()> {
    let db = setup(LogicalDatabase::Ukrdc).await?;
    let fixture = seed_record(&db, &random_digits(9)).await?;

    let result = family_doctor::ActiveModel {
        id: Set(fixture.patient.pid.clone()),
        gpid: Set(Some("G0000000".to_owned())),
        ..Default::default()
    }
    .insert(&db)
    .await;
    assert!(result.is_err());
    Ok(())
}

#[tokio::test]
async fn clinical_payloads_round_trip() -> anyhow::Result<()> {
    print_test_header(
        "clinical_payloads_round_trip",
        "decimal doses, binary documents and survey children survive storage",
    );
    let db = setup(LogicalDatabase::Ukrdc).await?;
    let fixture = seed_record(&db, &random_digits(9)).await?;
    let pid = fixture.record.pid.clone();

    let dose = Decimal::new(25, 1);
    medication::ActiveModel {
        id: Set(format!("{pid}-med-0")),
        pid: Set(Some(pid.clone())),
        repositoryupdatedate: Set(timestamp(2023, 2, 1)),
        drugproductgeneric: Set(Some("Alfacalcidol".to_owned())),
        dosequantity: Set(Some(dose)),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    let stored = medication::Entity::find_by_id(format!("{pid}-med-0"))
        .one(&db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("medication missing"))?;
    assert_eq!(stored.dosequantity, Some(dose));
    assert_eq!(stored.drugproductgeneric.as_deref(), Some("Alfacalcidol"));

    let payload = vec![0x25, 0x50, 0x44, 0x46, 0x00, 0xff];
    document::ActiveModel {
        id: Set(format!("{pid}-doc-0")),
        pid: Set(Some(pid.clone())),
        repositoryupdatedate: Set(timestamp(2023, 2, 1)),
        notetext: Set(Some("clinic letter".repeat(100))),
        stream: Set(Some(payload.clone())),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    let stored = document::Entity::find_by_id(format!("{pid}-doc-0"))
        .one(&db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("document missing"))?;
    assert_eq!(stored.stream, Some(payload));

    let survey = survey::ActiveModel {
        id: Set(format!("{pid}-survey-0")),
        pid: Set(Some(pid.clone())),
        surveytime: Set(timestamp(2023, 4, 1)),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    score::ActiveModel {
        id: Set(format!("{pid}-score-0")),
        surveyid: Set(Some(survey.id.clone())),
        scorevalue: Set(Some("12".to_owned())),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    let scores = survey.find_related(score::Entity).all(&db).await?;
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].value().as_deref(), Some("12"));
    Ok(())
}

/// Inserts a model, loads it again by the listed key columns and checks that
/// the stored row matches what the insert returned.
macro_rules! assert_round_trip {
    ($db:expr, $entity:ident [$($key:ident),+] { $($field:ident: $value:expr),* $(,)? }) => {{
        let inserted = $entity::ActiveModel {
            $($field: Set($value),)*
            ..Default::default()
        }
        .insert($db)
        .await?;
        let stored = $entity::Entity::find_by_id(($(inserted.$key.clone()),+))
            .one($db)
            .await?;
        assert_eq!(stored.as_ref(), Some(&inserted), "{}", stringify!($entity));
        inserted
    }};
}

#[tokio::test]
async fn patient_children_round_trip() -> anyhow::Result<()> {
    print_test_header(
        "patient_children_round_trip",
        "every per-record clinical table stores and reloads a row",
    );
    let db = setup(LogicalDatabase::Ukrdc).await?;
    let fixture = seed_record(&db, &random_digits(9)).await?;
    let pid = fixture.record.pid.clone();
    let id = |kind: &str| format!("{pid}-{kind}-0");
    let from = NaiveDate::from_ymd_opt(2022, 4, 1);

    assert_round_trip!(&db, allergy [id] {
        id: id("allergy"),
        pid: Some(pid.clone()),
        allergycode: Some("91936005".to_owned()),
        allergycodestd: Some("SNOMED".to_owned()),
        discoverytime: Some(timestamp(2021, 3, 4)),
    });
    let death = assert_round_trip!(&db, cause_of_death [pid] {
        pid: pid.clone(),
        diagnosistype: Some("final".to_owned()),
        diagnosiscode: Some("I12.0".to_owned()),
        comments: Some("Cardiac arrest".to_owned()),
    });
    assert!(death.creation_date.and_utc().timestamp() > 0);
    assert_round_trip!(&db, clinical_relationship [id] {
        id: id("clinrel"),
        pid: Some(pid.clone()),
        facilitycode: Some("RXF01".to_owned()),
        fromtime: from,
        totime: None,
    });
    assert_round_trip!(&db, contact_detail [id] {
        id: id("contact"),
        pid: Some(pid.clone()),
        contactuse: Some("PRN".to_owned()),
        contactvalue: Some("01632 960000".to_owned()),
    });
    assert_round_trip!(&db, dialysis_session [id] {
        id: id("dialysis"),
        pid: Some(pid.clone()),
        proceduretime: Some(timestamp(2023, 5, 2)),
        qhd19: Some("N".to_owned()),
        qhd33: Some("240".to_owned()),
    });
    assert_round_trip!(&db, encounter [id] {
        id: id("encounter"),
        pid: Some(pid.clone()),
        encountertype: Some("I".to_owned()),
        fromtime: Some(timestamp(2023, 1, 9)),
        totime: Some(timestamp(2023, 1, 12)),
    });
    assert_round_trip!(&db, family_history [id] {
        id: id("famhist"),
        pid: Some(pid.clone()),
        familymembercode: Some("FTH".to_owned()),
        diagnosiscode: Some("Q61.2".to_owned()),
    });
    assert_round_trip!(&db, opt_out [id] {
        id: id("optout"),
        pid: Some(pid.clone()),
        programname: Some("RADAR".to_owned()),
        fromtime: from,
    });
    assert_round_trip!(&db, procedure [id] {
        id: id("procedure"),
        pid: Some(pid.clone()),
        proceduretypecode: Some("M01.2".to_owned()),
        proceduretime: Some(timestamp(2022, 11, 30)),
    });
    assert_round_trip!(&db, program_membership [id] {
        id: id("program"),
        pid: Some(pid.clone()),
        programname: Some("PV".to_owned()),
        fromtime: from,
    });
    assert_round_trip!(&db, renal_diagnosis [pid] {
        pid: pid.clone(),
        diagnosiscode: Some("N18.5".to_owned()),
        onsettime: Some(timestamp(2019, 7, 1)),
    });
    assert_round_trip!(&db, social_history [id] {
        id: id("social"),
        pid: Some(pid.clone()),
        socialhabitcode: Some("77176002".to_owned()),
    });
    assert_round_trip!(&db, transplant [id] {
        id: id("transplant"),
        pid: Some(pid.clone()),
        proceduretime: Some(timestamp(2020, 2, 14)),
        tra64: Some(timestamp(2020, 3, 1)),
        tra77: Some("LD".to_owned()),
    });
    assert_round_trip!(&db, transplant_list [id] {
        id: id("tplist"),
        pid: Some(pid.clone()),
        encountertype: Some("TL".to_owned()),
        fromtime: Some(timestamp(2019, 10, 1)),
    });
    assert_round_trip!(&db, vascular_access [id] {
        id: id("access"),
        pid: Some(pid.clone()),
        proceduretypecode: Some("AVF".to_owned()),
        acc19: Some("L".to_owned()),
    });
    let error = assert_round_trip!(&db, validation_error [vid] {
        pid: Some(pid.clone()),
        updated_on: Some(timestamp(2023, 6, 1)),
        error_type: Some("ERROR".to_owned()),
        message: Some("Missing birth time".to_owned()),
    });
    assert!(error.vid > 0);
    Ok(())
}

#[tokio::test]
async fn reference_tables_round_trip() -> anyhow::Result<()> {
    print_test_header(
        "reference_tables_round_trip",
        "lookup, mapping and bookkeeping tables store and reload a row",
    );
    let db = setup(LogicalDatabase::Ukrdc).await?;

    assert_round_trip!(&db, code_exclusion [coding_standard, code, system] {
        coding_standard: "RR1+".to_owned(),
        code: "99".to_owned(),
        system: "PKB".to_owned(),
    });
    assert_round_trip!(&db, code_map [
        source_coding_standard, source_code, destination_coding_standard, destination_code
    ] {
        source_coding_standard: "RR1+".to_owned(),
        source_code: "100".to_owned(),
        destination_coding_standard: "EDTA2".to_owned(),
        destination_code: "1001".to_owned(),
    });
    assert_round_trip!(&db, rr_codes [id, rr_code] {
        id: "MODALITY".to_owned(),
        rr_code: "1".to_owned(),
        description_1: Some("Haemodialysis".to_owned()),
        new_value: Some("HD".to_owned()),
    });
    assert_round_trip!(&db, locations [centre_code] {
        centre_code: "RXF01".to_owned(),
        centre_name: Some("Leeds".to_owned()),
        paed_unit: Some(0),
    });
    let definition = assert_round_trip!(&db, rr_data_definition [upload_key] {
        upload_key: "L01".to_owned(),
        table_name: "TREATMENT".to_owned(),
        field_name: "HD_QUIN".to_owned(),
        mandatory: Some(Decimal::ONE),
        code_type: Some("N".to_owned()),
        ckd5_mand_numeric: Some(Decimal::ZERO),
        load_min: Some(Decimal::new(25, 1)),
        load_max: Some(Decimal::new(4000, 0)),
    });
    assert_eq!(definition.load_min, Some(Decimal::new(25, 1)));
    assert_eq!(definition.mandatory, Some(Decimal::ONE));
    let modality = assert_round_trip!(&db, modality_codes [registry_code] {
        registry_code: "1".to_owned(),
        registry_code_desc: Some("Haemodialysis".to_owned()),
        registry_code_type: "TX".to_owned(),
        acute: false,
        transfer_in: false,
        ckd: false,
        cons: false,
        rrt: true,
        end_of_care: false,
        is_imprecise: true,
        transfer_out: Some(false),
    });
    assert!(modality.rrt && modality.is_imprecise);
    assert_round_trip!(&db, satellite_map [satellite_code, main_unit_code] {
        satellite_code: "RXF10".to_owned(),
        main_unit_code: "RXF01".to_owned(),
    });
    assert_round_trip!(&db, facility_relationship [
        parentfacilitycode, parentfacilitycodestd, childfacilitycode, childfacilitycodestd
    ] {
        parentfacilitycode: "RXF01".to_owned(),
        parentfacilitycodestd: "ODS".to_owned(),
        childfacilitycode: "RXF10".to_owned(),
        childfacilitycodestd: "ODS".to_owned(),
        relationshiptype: Some("SATELLITE".to_owned()),
    });
    assert_round_trip!(&db, value_exclusion [system, norm_value] {
        system: "PV".to_owned(),
        norm_value: "NOT DONE".to_owned(),
    });
    assert_round_trip!(&db, file [sendingfacility, sendingextract, ni] {
        sendingfacility: "RXF01".to_owned(),
        sendingextract: "UKRDC".to_owned(),
        ni: random_digits(10),
        filename: "RXF01_00001.xml".to_owned(),
        checksum: "9f86d081884c7d659a2feaa0c55ad015".to_owned(),
        status: "STORED".to_owned(),
        received_on: timestamp(2023, 8, 1),
    });
    assert_round_trip!(&db, event_control [event_type] {
        event_type: "DAILY_STATS".to_owned(),
        event_date: Some(timestamp(2023, 8, 2)),
        pending_event_date: None,
    });
    let link = assert_round_trip!(&db, pkb_link [id] {
        link: Some("https://www.nhs.uk/conditions/kidney-disease/".to_owned()),
        link_name: Some("Kidney disease".to_owned()),
        coding_standard: Some("SNOMED".to_owned()),
        code: Some("709044004".to_owned()),
    });
    assert!(link.id > 0);
    Ok(())
}

#[tokio::test]
async fn pv_delete_ids_are_generated() -> anyhow::Result<()> {
    let db = setup(LogicalDatabase::Ukrdc).await?;
    let fixture = seed_record(&db, &random_digits(9)).await?;

    for code in ["HB", "CRE"] {
        pv_delete::ActiveModel {
            pid: Set(Some(fixture.record.pid.clone())),
            serviceidcode: Set(Some(code.to_owned())),
            ..Default::default()
        }
        .insert(&db)
        .await?;
    }

    let deletes = fixture
        .record
        .find_related(pv_delete::Entity)
        .all(&db)
        .await?;
    assert_eq!(deletes.len(), 2);
    assert_ne!(deletes[0].did, deletes[1].did);
    assert_eq!(pv_delete::Entity::find().count(&db).await?, 2);
    Ok(())
}

#[tokio::test]
async fn migrations_can_be_rolled_back_and_reapplied() -> anyhow::Result<()> {
    use ukrdc_orm::{migrate, MigrationCommand};

    let db = setup(LogicalDatabase::Ukrdc).await?;
    seed_record(&db, &random_digits(9)).await?;

    migrate(&db, LogicalDatabase::Ukrdc, MigrationCommand::Status).await?;
    migrate(&db, LogicalDatabase::Ukrdc, MigrationCommand::Down).await?;
    assert!(patient_record::Entity::find().count(&db).await.is_err());

    migrate(&db, LogicalDatabase::Ukrdc, MigrationCommand::Up).await?;
    assert_eq!(patient_record::Entity::find().count(&db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn schema_persists_in_file_database() -> anyhow::Result<()> {
    use ukrdc_orm::{connect, migrate, DatabaseConfig, MigrationCommand};

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("ukrdc.sqlite3");
    let config = DatabaseConfig::new(format!("sqlite://{}?mode=rwc", path.display()));

    let db = connect(&config).await?;
    migrate(&db, LogicalDatabase::Ukrdc, MigrationCommand::Up).await?;
    let fixture = seed_record(&db, &random_digits(9)).await?;
    db.close().await?;

    let reopened = connect(&config).await?;
    // Re-running is a no-op once every migration is recorded.
    migrate(&reopened, LogicalDatabase::Ukrdc, MigrationCommand::Up).await?;
    let stored = patient_record::Entity::find_by_id(fixture.record.pid.clone())
        .one(&reopened)
        .await?;
    assert_eq!(stored, Some(fixture.record));
    Ok(())
}
