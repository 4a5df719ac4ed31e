//! Physical person: civil identity shared by professionals, patients and contacts.

use serde::{Deserialize, Serialize};

use super::{MosCode, MosDate, MosIdentifier, MosMeasure, MosMetadata, MosText, SpokenLanguage};
use crate::serialization::{Field, MosSerializer};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalPerson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<Vec<MosIdentifier>>,
    /// Civility (Monsieur, Madame).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<MosCode>,
    pub birth_family_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_name: Option<String>,
    pub given_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationalities: Option<Vec<MosCode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spoken_languages: Option<Vec<SpokenLanguage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measures: Option<Vec<MosMeasure>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl PhysicalPerson {
    /// Create a person with the two required identity fields.
    pub fn new(birth_family_name: impl Into<String>, given_names: Vec<String>) -> Self {
        Self {
            birth_family_name: birth_family_name.into(),
            given_names,
            ..Default::default()
        }
    }

    /// Name in use: the used name when present, else the birth name.
    pub fn display_family_name(&self) -> &str {
        self.used_name.as_deref().unwrap_or(&self.birth_family_name)
    }
}

impl MosSerializer for PhysicalPerson {
    const FIELDS: &'static [Field] = &[
        Field::many("identifiers", MosIdentifier::sanitize_document),
        Field::one("title", MosCode::sanitize_document),
        Field::one("birthDate", MosDate::sanitize_document),
        Field::one("birthPlace", MosText::sanitize_document),
        Field::one("sex", MosCode::sanitize_document),
        Field::many("nationalities", MosCode::sanitize_document),
        Field::many("spokenLanguages", SpokenLanguage::sanitize_document),
        Field::many("measures", MosMeasure::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::document_from_value;
    use serde_json::{json, Value};

    fn dupont() -> PhysicalPerson {
        PhysicalPerson {
            sex: Some(MosCode {
                label: Some("Masculin".to_string()),
                code_system_id: Some("TRE_R02-Sexe".to_string()),
                ..MosCode::new("M")
            }),
            ..PhysicalPerson::new("Dupont", vec!["Jean".to_string(), "Michel".to_string()])
        }
    }

    #[test]
    fn test_dupont_persisted_shape() {
        let doc = dupont().to_persisted().unwrap();
        assert_eq!(
            Value::Object(doc),
            json!({
                "birthFamilyName": "Dupont",
                "givenNames": ["Jean", "Michel"],
                "sex": {"value": "M", "label": "Masculin", "codeSystemId": "TRE_R02-Sexe"}
            })
        );
    }

    #[test]
    fn test_empty_list_is_retained() {
        let person = PhysicalPerson {
            nationalities: Some(vec![]),
            ..dupont()
        };
        let doc = person.to_persisted().unwrap();
        assert_eq!(doc.get("nationalities"), Some(&json!([])));
        assert!(!doc.contains_key("spokenLanguages"));
    }

    #[test]
    fn test_missing_required_field_not_rejected() {
        let doc = document_from_value(json!({"givenNames": ["Alice"], "usedName": null})).unwrap();
        let out = PhysicalPerson::sanitize_document(doc);
        assert_eq!(Value::Object(out), json!({"givenNames": ["Alice"]}));
    }

    #[test]
    fn test_from_persisted_attaches_identity() {
        let mut stored = dupont().to_persisted().unwrap();
        stored.insert("_id".to_string(), json!("6523f0c1"));
        let dto = PhysicalPerson::from_persisted(stored).unwrap();
        assert_eq!(dto.id, "6523f0c1");
        assert_eq!(dto.value, dupont());
    }

    #[test]
    fn test_display_family_name() {
        let mut person = dupont();
        assert_eq!(person.display_family_name(), "Dupont");
        person.used_name = Some("Durand".to_string());
        assert_eq!(person.display_family_name(), "Durand");
    }
}
