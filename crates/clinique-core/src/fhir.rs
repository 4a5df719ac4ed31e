//! FHIR-shaped projection of stored records.
//!
//! Maps person-under-care and professional DTOs to `Patient` and
//! `Practitioner` resources, and wraps them in a `collection` Bundle.
//! Only the demographic subset is projected; this is not a conformant
//! FHIR server model.

use serde::{Deserialize, Serialize};

use crate::models::{MosIdentifier, PersonUnderCare, PhysicalPerson, Professional};
use crate::serialization::{Dto, ModelResult};

/// System of the national health identifier (INS-NIR).
pub const INS_SYSTEM: &str = "urn:oid:1.2.250.1.213.1.4.10";

/// System of identifiers local to this application.
pub const LOCAL_PATIENT_SYSTEM: &str = "https://example.org/fhir/identifier/patient-local";

/// System of the national professional identifier (RPPS).
pub const RPPS_SYSTEM: &str = "urn:oid:1.2.250.1.71.4.2.1";

// ============================================================================
// Wire models
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FhirIdentifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FhirHumanName {
    #[serde(rename = "use")]
    pub use_type: String,
    pub family: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub given: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FhirPatient {
    pub resource_type: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<FhirIdentifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<FhirHumanName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FhirPractitioner {
    pub resource_type: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<FhirIdentifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<FhirHumanName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    pub full_url: String,
    pub resource: serde_json::Value,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub resource_type: String,
    #[serde(rename = "type")]
    pub bundle_type: String,
    pub total: usize,
    #[serde(default)]
    pub entry: Vec<BundleEntry>,
}

// ============================================================================
// Projection
// ============================================================================

/// Project a stored person under care onto a FHIR `Patient`.
pub fn patient_resource(dto: &Dto<PersonUnderCare>) -> FhirPatient {
    let patient = &dto.value;

    let mut identifier = Vec::new();
    if let Some(matricule) = patient
        .national_identity
        .as_ref()
        .and_then(|ins| ins.matricule.as_ref())
    {
        identifier.push(fhir_identifier(matricule, INS_SYSTEM));
    }
    identifier.extend(
        patient
            .local_identifiers
            .iter()
            .flatten()
            .map(|local| fhir_identifier(local, LOCAL_PATIENT_SYSTEM)),
    );

    let person = patient.person.as_ref();
    FhirPatient {
        resource_type: "Patient".to_string(),
        id: dto.id.clone(),
        identifier,
        name: person.map(human_names).unwrap_or_default(),
        gender: person.and_then(gender),
        birth_date: person
            .and_then(|p| p.birth_date.as_ref())
            .map(|date| date.value.clone()),
    }
}

/// Project a stored professional onto a FHIR `Practitioner`.
pub fn practitioner_resource(dto: &Dto<Professional>) -> FhirPractitioner {
    let professional = &dto.value;
    let person = professional.person.as_ref();

    FhirPractitioner {
        resource_type: "Practitioner".to_string(),
        id: dto.id.clone(),
        identifier: professional
            .national_id
            .iter()
            .map(|id| fhir_identifier(id, RPPS_SYSTEM))
            .collect(),
        name: person.map(human_names).unwrap_or_default(),
        gender: person.and_then(gender),
    }
}

/// Wrap resources in a `collection` Bundle. Each entry is `(resource type, id, resource)`.
pub fn collection_bundle<R: Serialize>(resources: &[(&str, &str, R)]) -> ModelResult<Bundle> {
    let mut entry = Vec::with_capacity(resources.len());
    for (resource_type, id, resource) in resources {
        entry.push(BundleEntry {
            full_url: format!("{resource_type}/{id}"),
            resource: serde_json::to_value(resource)?,
        });
    }
    Ok(Bundle {
        resource_type: "Bundle".to_string(),
        bundle_type: "collection".to_string(),
        total: entry.len(),
        entry,
    })
}

fn fhir_identifier(identifier: &MosIdentifier, default_system: &str) -> FhirIdentifier {
    FhirIdentifier {
        system: Some(
            identifier
                .issuing_system_uri
                .clone()
                .unwrap_or_else(|| default_system.to_string()),
        ),
        value: identifier.value.clone(),
    }
}

fn human_names(person: &PhysicalPerson) -> Vec<FhirHumanName> {
    let mut names = vec![FhirHumanName {
        use_type: "official".to_string(),
        family: person.birth_family_name.clone(),
        given: person.given_names.clone(),
    }];
    if let Some(used) = person.used_name.as_ref().filter(|used| **used != person.birth_family_name) {
        names.push(FhirHumanName {
            use_type: "usual".to_string(),
            family: used.clone(),
            given: person.given_names.clone(),
        });
    }
    names
}

fn gender(person: &PhysicalPerson) -> Option<String> {
    let gender = match person.sex.as_ref()?.value.as_str() {
        "M" => "male",
        "F" => "female",
        _ => "unknown",
    };
    Some(gender.to_string())
}
