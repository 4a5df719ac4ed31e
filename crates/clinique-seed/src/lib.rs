//! Sample MOS data for La Clinique.
//!
//! Builds a small, consistent graph of records (one practitioner with their
//! card and certificate, one patient, one authorization) and writes it to the
//! document store. Every record carries the seed tag in its provenance
//! version so a later run can purge and reinsert it.

use chrono::{DateTime, Utc};
use clinique_core::catalog::{resolve_code, CatalogResult};
use clinique_core::db::{Database, DbError};
use clinique_core::models::*;
use clinique_core::{persist, CliniqueResult};

/// Tag applied when none is given.
pub const DEFAULT_TAG: &str = "sample-data";

/// Name recorded as the author of seeded records.
pub const SEED_SOURCE: &str = "seed-script";

/// Document path holding the seed tag.
pub const TAG_PATH: &str = "provenance.version.value";

/// Authentication devices carry no provenance of their own; the tag sits on
/// their first card.
pub const DEVICE_TAG_PATH: &str = "cards.0.provenance.version.value";

// ============================================================================
// Value builders
// ============================================================================

pub fn iso_date(value: &str) -> MosDate {
    MosDate {
        value: value.to_string(),
        format: Some(DATE_FORMAT.to_string()),
    }
}

pub fn iso_date_time(value: &str) -> MosDateTime {
    MosDateTime {
        value: value.to_string(),
        format: Some(DATE_TIME_FORMAT.to_string()),
    }
}

/// French text.
pub fn text(value: impl Into<String>) -> MosText {
    MosText::with_language(value, "fr")
}

/// Identifier typed with a professional-role code.
pub fn identifier(value: &str, system: &str, type_key: &str) -> CatalogResult<MosIdentifier> {
    Ok(MosIdentifier {
        issuing_system_id: Some(system.to_string()),
        identifier_type: Some(resolve_code("roleProfessionnel", type_key)?),
        ..MosIdentifier::new(value)
    })
}

/// Provenance block stamped on every seeded record.
pub fn metadata(source: &str, tag: &str, now: DateTime<Utc>) -> MosMetadata {
    MosMetadata {
        comment: Some(text(format!("Ensemencé par {source}"))),
        version: Some(text(tag)),
        created_at: Some(MosDateTime::from_utc(now)),
        updated_at: Some(MosDateTime::from_utc(now)),
        ..Default::default()
    }
}

// ============================================================================
// Sample graph
// ============================================================================

/// The records written by one seed run.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGraph {
    pub physical_person: PhysicalPerson,
    pub authentication_device: AuthenticationDevice,
    pub professional: Professional,
    pub person_under_care: PersonUnderCare,
    pub authorization: Authorization,
}

impl SampleGraph {
    pub fn build(tag: &str, now: DateTime<Utc>) -> CatalogResult<Self> {
        let provenance = || Some(metadata(SEED_SOURCE, tag, now));

        let physical_person = PhysicalPerson {
            identifiers: Some(vec![identifier(
                "198765432101234",
                "urn:oid:1.2.250.1.213.1.4.8",
                "MEDECIN",
            )?]),
            title: Some(resolve_code("civilite", "M")?),
            birth_date: Some(iso_date("1981-03-14")),
            sex: Some(resolve_code("sexe", "M")?),
            provenance: provenance(),
            ..PhysicalPerson::new("Dupont", vec!["Jean".to_string(), "Michel".to_string()])
        };

        let authentication_device = AuthenticationDevice {
            cards: Some(vec![ProfessionalCard {
                card_type: Some(resolve_code("typeCarte", "CPS")?),
                card_number: Some(text("99887766")),
                valid_from: Some(iso_date_time("2023-01-01T00:00:00Z")),
                valid_until: Some(iso_date_time("2026-12-31T23:59:59Z")),
                provenance: provenance(),
                ..Default::default()
            }]),
            certificates: Some(vec![Certificate {
                serial_number: Some(text(uuid::Uuid::new_v4().to_string())),
                assurance_level: Some(text("niv3")),
                subject_dn: Some(text("cn=DUPONTJEAN,ou=CPS,o=ANS")),
                valid_from: Some(iso_date_time("2023-01-01T00:00:00Z")),
                valid_until: Some(iso_date_time("2024-12-31T23:59:59Z")),
                usage: Some(resolve_code("usageCertificat", "AUTH")?),
                domain: Some(text("e-sante")),
                email: Some(MosTelecom {
                    system: resolve_code("usageCertificat", "AUTH")?,
                    usage: Some(resolve_code("usageProfessionnel", "PRESC")?),
                    value: "jean.dupont@esante.gouv.fr".to_string(),
                    provenance: provenance(),
                    ..Default::default()
                }),
                professional_usage: Some(resolve_code("usageProfessionnel", "PRESC")?),
                card_type: Some(resolve_code("typeCarte", "CPS")?),
                identifier: Some(identifier(
                    "CPS-99887766",
                    "urn:oid:1.2.250.1.213.1.4.9",
                    "MEDECIN",
                )?),
                public_key: Some(text(
                    "-----BEGIN PUBLIC KEY-----MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8A-----END PUBLIC KEY-----",
                )),
                publication_status: Some(text("PUB")),
                provenance: provenance(),
            }]),
        };

        let professional = Professional {
            pp_identifier: Some(identifier(
                "IDPP-123456",
                "urn:oid:1.2.250.1.213.1.4.10",
                "MEDECIN",
            )?),
            pp_identifier_type: Some(resolve_code("roleProfessionnel", "MEDECIN")?),
            national_id: Some(identifier("RPPS-34987654321", "urn:oid:1.2.250.1.71", "MEDECIN")?),
            person: Some(physical_person.clone()),
            telecoms: Some(vec![MosTelecom {
                system: resolve_code("usageCertificat", "AUTH")?,
                usage: Some(resolve_code("usageProfessionnel", "PRESC")?),
                value: "+33102030405".to_string(),
                provenance: provenance(),
                ..Default::default()
            }]),
            practices: Some(vec![ProfessionalPractice {
                practice_title: Some(resolve_code("civilite", "M")?),
                practice_family_name: Some(text("Dupont")),
                practice_given_name: Some(text("Jean")),
                professional_title: Some(resolve_code("roleProfessionnel", "MEDECIN")?),
                professional_category: Some(resolve_code("roleProfessionnel", "MEDECIN")?),
                start_date: Some(iso_date("2010-05-01")),
                exercise_situations: Some(vec![ExerciseSituation {
                    role: Some(resolve_code("roleProfessionnel", "MEDECIN")?),
                    exercise_mode: Some(resolve_code("modeExercice", "LIBERAL")?),
                    insurance_number: Some(identifier(
                        "AM-12345",
                        "urn:oid:1.2.250.1.71.4.2",
                        "MEDECIN",
                    )?),
                    telecoms: Some(vec![]),
                    provenance: provenance(),
                    ..Default::default()
                }]),
                authentication_devices: Some(vec![authentication_device.clone()]),
                provenance: provenance(),
                ..Default::default()
            }]),
            provenance: provenance(),
            ..Default::default()
        };

        let person_under_care = PersonUnderCare {
            person: Some(PhysicalPerson {
                title: Some(resolve_code("civilite", "F")?),
                sex: Some(resolve_code("sexe", "F")?),
                ..PhysicalPerson::new("Martin", vec!["Alice".to_string()])
            }),
            provenance: provenance(),
            ..Default::default()
        };

        let authorization_number =
            identifier("AUTO-123", "urn:oid:1.2.250.1.213.1.5.1", "MEDECIN")?;
        let authorization = Authorization {
            identifiers: Some(vec![authorization_number.clone()]),
            care_activities: Some(vec![AuthorizedCareActivity {
                authorization_number: Some(authorization_number),
                decision_date: Some(iso_date("2022-01-10")),
                activity: Some(resolve_code("discipline", "MED_GEN")?),
                provenance: provenance(),
                ..Default::default()
            }]),
            exercised_capacities: Some(vec![ExercisedActivityCapacity {
                social_aid_habilitation: Some(resolve_code("habilitation", "AIDE_SOCIALE")?),
                financing_mode: Some(resolve_code("modeFinancement", "CPAM")?),
                accommodation: Some(AccommodationCapacity {
                    identifier: Some(identifier(
                        "CAP-ACC-1",
                        "urn:oid:1.2.250.1.213.1.5.3",
                        "MEDECIN",
                    )?),
                    measures: Some(vec![CapacityMeasure::General(MosCapacity {
                        nature: Some(resolve_code("discipline", "MED_GEN")?),
                        count: Some(MosNumeric {
                            value: 12.0,
                            provenance: provenance(),
                        }),
                        provenance: provenance(),
                        ..Default::default()
                    })]),
                    provenance: provenance(),
                }),
                provenance: provenance(),
                ..Default::default()
            }]),
            provenance: provenance(),
            ..Default::default()
        };

        Ok(Self {
            physical_person,
            authentication_device,
            professional,
            person_under_care,
            authorization,
        })
    }
}

// ============================================================================
// Seeding
// ============================================================================

/// Identities assigned by one seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub tag: String,
    pub purged: usize,
    pub physical_person_id: String,
    pub authentication_device_id: String,
    pub professional_id: String,
    pub person_under_care_id: String,
    pub authorization_id: String,
}

/// Delete every document carrying `tag`, in all collections.
pub fn purge(db: &Database, tag: &str) -> CliniqueResult<usize> {
    let tag_value = serde_json::Value::String(tag.to_string());
    let purged = db.physical_persons().delete_by_path(TAG_PATH, &tag_value)?
        + db.authentication_devices().delete_by_path(DEVICE_TAG_PATH, &tag_value)?
        + db.professionals().delete_by_path(TAG_PATH, &tag_value)?
        + db.persons_under_care().delete_by_path(TAG_PATH, &tag_value)?
        + db.authorizations().delete_by_path(TAG_PATH, &tag_value)?;

    if purged > 0 {
        tracing::warn!(tag, purged, "Removed previously seeded documents");
    }
    Ok(purged)
}

/// Replace the sample graph tagged `tag`.
pub fn seed(db: &Database, tag: &str) -> CliniqueResult<SeedReport> {
    seed_at(db, tag, Utc::now())
}

/// [`seed`] with a fixed clock.
///
/// The purge and the inserts share one transaction: a failure leaves the
/// previous run in place.
pub fn seed_at(db: &Database, tag: &str, now: DateTime<Utc>) -> CliniqueResult<SeedReport> {
    let graph = SampleGraph::build(tag, now)?;
    let tx = db.transaction()?;
    let purged = purge(db, tag)?;

    let report = SeedReport {
        tag: tag.to_string(),
        purged,
        physical_person_id: persist(db, &graph.physical_person)?,
        authentication_device_id: persist(db, &graph.authentication_device)?,
        professional_id: persist(db, &graph.professional)?,
        person_under_care_id: persist(db, &graph.person_under_care)?,
        authorization_id: persist(db, &graph.authorization)?,
    };
    tx.commit().map_err(DbError::from)?;

    tracing::info!(tag, "Sample MOS data inserted");
    Ok(report)
}
