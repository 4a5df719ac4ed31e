//! Store round-trip, catalog and capacity integration tests.

use clinique_core::catalog::{resolve_code, NosCatalog, URN_PREFIX};
use clinique_core::config::StoreConfig;
use clinique_core::db::{Database, RootEntity};
use clinique_core::models::*;
use clinique_core::serialization::{document_from_value, MosSerializer};
use clinique_core::{load, persist};
use serde_json::{json, Value};

fn make_person() -> PhysicalPerson {
    PhysicalPerson {
        title: Some(resolve_code("civilite", "M").unwrap()),
        sex: Some(resolve_code("sexe", "M").unwrap()),
        birth_date: Some(MosDate::new("1981-03-14")),
        nationalities: Some(vec![]),
        ..PhysicalPerson::new("Dupont", vec!["Jean".to_string(), "Michel".to_string()])
    }
}

fn make_capacity(kind: MeasureKind) -> CapacityMeasure {
    let capacity = MosCapacity {
        count: Some(MosNumeric::new(12.0)),
        status: Some(MosCode::new("OUV")),
        ..Default::default()
    };
    match kind {
        MeasureKind::General => CapacityMeasure::General(capacity),
        MeasureKind::Closed => CapacityMeasure::Closed(ClosedCapacity {
            capacity,
            closure_type: Some(MosCode::new("TRAVAUX")),
        }),
        MeasureKind::Supplementary => CapacityMeasure::Supplementary(SupplementaryCapacity {
            capacity,
            bed_type: Some(MosCode::new("LIT_SUPP")),
            crisis_type: Some(MosCode::new("EPIDEMIE")),
        }),
        MeasureKind::Installed => CapacityMeasure::Installed(InstalledCapacity {
            capacity,
            reference_year: Some(MosDate::new("2023")),
        }),
        MeasureKind::Available => CapacityMeasure::Available(AvailableCapacity {
            capacity,
            gender_scope: Some(MosCode::new("F")),
        }),
    }
}

fn round_trip<E: RootEntity + PartialEq + std::fmt::Debug>(db: &Database, entity: &E) {
    let id = persist(db, entity).unwrap();
    let dto = load::<E>(db, &id).unwrap().unwrap();
    assert_eq!(dto.id, id);
    assert_eq!(&dto.value, entity);
}

#[test]
fn test_dupont_scenario() {
    let db = Database::open_in_memory().unwrap();
    let person = make_person();

    let id = persist(&db, &person).unwrap();
    let stored = db.physical_persons().find_by_id(&id).unwrap().unwrap();

    assert_eq!(stored.get("birthFamilyName"), Some(&json!("Dupont")));
    assert_eq!(stored.get("givenNames"), Some(&json!(["Jean", "Michel"])));
    assert_eq!(stored.get("nationalities"), Some(&json!([])));
    assert_eq!(
        stored.get("sex"),
        Some(&json!({
            "value": "M",
            "label": "Masculin",
            "codeSystemId": "TRE_R02-Sexe",
            "codeSystemName": "TRE_R02-Sexe",
            "codeSystemVersion": "2024-01",
            "codeSystemURN": "urn:mos:nos:TRE_R02-Sexe"
        }))
    );
    assert!(!stored.contains_key("usedName"));

    let dto = PhysicalPerson::from_persisted(stored).unwrap();
    assert_eq!(dto.id, id);
    assert_eq!(dto.value, person);
}

#[test]
fn test_every_root_entity_round_trips() {
    let db = Database::open_in_memory().unwrap();

    round_trip(&db, &make_person());
    round_trip(
        &db,
        &AuthenticationDevice {
            cards: Some(vec![ProfessionalCard {
                card_type: Some(resolve_code("typeCarte", "CPS").unwrap()),
                ..Default::default()
            }]),
            certificates: None,
        },
    );
    round_trip(
        &db,
        &Professional {
            pp_identifier: Some(MosIdentifier::new("IDPP-123456")),
            person: Some(make_person()),
            ..Default::default()
        },
    );
    round_trip(
        &db,
        &PersonUnderCare {
            person: Some(PhysicalPerson::new("Martin", vec!["Alice".to_string()])),
            ..Default::default()
        },
    );
    round_trip(
        &db,
        &Authorization {
            exercised_capacities: Some(vec![ExercisedActivityCapacity {
                accommodation: Some(AccommodationCapacity {
                    measures: Some(MeasureKind::ALL.into_iter().map(make_capacity).collect()),
                    ..Default::default()
                }),
                ..Default::default()
            }]),
            ..Default::default()
        },
    );
}

#[test]
fn test_update_is_whole_replacement() {
    let db = Database::open_in_memory().unwrap();
    let id = persist(&db, &make_person()).unwrap();

    let renamed = PhysicalPerson {
        used_name: Some("Durand".to_string()),
        ..PhysicalPerson::new("Dupont", vec!["Jean".to_string()])
    };
    assert!(db
        .physical_persons()
        .replace_one(&id, &renamed.to_persisted().unwrap())
        .unwrap());

    let dto = load::<PhysicalPerson>(&db, &id).unwrap().unwrap();
    assert_eq!(dto.value, renamed);
    assert!(dto.value.sex.is_none());
}

#[test]
fn test_catalog_totality() {
    let catalog = NosCatalog::builtin();
    let mut total = 0;
    for domain in catalog.domains() {
        for (key, entry) in catalog.entries(domain).unwrap() {
            let code = resolve_code(domain, key).unwrap();
            assert_eq!(code.value, entry.code);
            assert_eq!(code.label.as_deref(), Some(entry.label.as_str()));
            assert_eq!(
                code.code_system_urn,
                Some(format!("{URN_PREFIX}{}", entry.nomenclature))
            );
            assert_eq!(code.code_system_id, code.code_system_name);
            total += 1;
        }
    }
    assert_eq!(total, catalog.len());
    assert!(total >= 15);
}

#[test]
fn test_capacity_variants_round_trip_without_contamination() {
    for kind in MeasureKind::ALL {
        let measure = make_capacity(kind);
        let doc = measure.to_persisted().unwrap();
        assert_eq!(doc.get("measureKind"), Some(&json!(kind.as_str())));

        let reread: CapacityMeasure = serde_json::from_value(Value::Object(
            CapacityMeasure::sanitize_document(doc.clone()),
        ))
        .unwrap();
        assert_eq!(reread, measure);
        assert_eq!(reread.kind(), kind);
    }
}

#[test]
fn test_capacity_foreign_fields_stripped_on_read() {
    let stored = document_from_value(json!({
        "_id": "cap-9",
        "measures": [
            {"measureKind": "installed", "referenceYear": {"value": "2021"}, "genderScope": {"value": "F"}},
            {"nombre": 3}
        ]
    }))
    .unwrap();

    let dto = AccommodationCapacity::from_persisted(stored).unwrap();
    let measures = dto.value.measures.unwrap();
    match &measures[0] {
        CapacityMeasure::Installed(installed) => {
            assert_eq!(installed.reference_year, Some(MosDate::new("2021")));
        }
        other => panic!("expected installed, got {other:?}"),
    }
    assert_eq!(measures[1].kind(), MeasureKind::General);
}

#[test]
fn test_file_store_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::from_env_values(
        Some(dir.path().join("data").display().to_string()),
        Some("clinique_test".to_string()),
    )
    .unwrap();

    let db = Database::open_with_config(&config).unwrap();
    let id = persist(&db, &make_person()).unwrap();
    db.close().unwrap();

    assert!(config.database_path().exists());
    let db = Database::open_with_config(&config).unwrap();
    assert!(load::<PhysicalPerson>(&db, &id).unwrap().is_some());
}
