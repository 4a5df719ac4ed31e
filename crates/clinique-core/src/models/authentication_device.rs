//! Authentication devices: CPS smart cards and software certificates.

use serde::{Deserialize, Serialize};

use super::{MosCode, MosDateTime, MosIdentifier, MosMetadata, MosTelecom, MosText};
use crate::serialization::{Field, MosSerializer};

/// Health professional smart card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<MosDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<MosDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked_on: Option<MosDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for ProfessionalCard {
    const FIELDS: &'static [Field] = &[
        Field::one("cardType", MosCode::sanitize_document),
        Field::one("cardNumber", MosText::sanitize_document),
        Field::one("validFrom", MosDateTime::sanitize_document),
        Field::one("validUntil", MosDateTime::sanitize_document),
        Field::one("revokedOn", MosDateTime::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// X.509 certificate issued for authentication or signature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assurance_level: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_dn: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<MosDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<MosDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<MosTelecom>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_usage: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<MosIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_status: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for Certificate {
    const FIELDS: &'static [Field] = &[
        Field::one("serialNumber", MosText::sanitize_document),
        Field::one("assuranceLevel", MosText::sanitize_document),
        Field::one("subjectDn", MosText::sanitize_document),
        Field::one("validFrom", MosDateTime::sanitize_document),
        Field::one("validUntil", MosDateTime::sanitize_document),
        Field::one("usage", MosCode::sanitize_document),
        Field::one("domain", MosText::sanitize_document),
        Field::one("email", MosTelecom::sanitize_document),
        Field::one("professionalUsage", MosCode::sanitize_document),
        Field::one("cardType", MosCode::sanitize_document),
        Field::one("identifier", MosIdentifier::sanitize_document),
        Field::one("publicKey", MosText::sanitize_document),
        Field::one("publicationStatus", MosText::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// Cards and certificates held by one professional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationDevice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<ProfessionalCard>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Vec<Certificate>>,
}

impl MosSerializer for AuthenticationDevice {
    const FIELDS: &'static [Field] = &[
        Field::many("cards", ProfessionalCard::sanitize_document),
        Field::many("certificates", Certificate::sanitize_document),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::document_from_value;
    use serde_json::{json, Value};

    #[test]
    fn test_certificate_email_sanitized() {
        let doc = document_from_value(json!({
            "certificates": [{
                "usage": {"value": "AUTH", "label": null},
                "email": {
                    "system": {"value": "MAIL"},
                    "value": "jean.dupont@esante.gouv.fr",
                    "usage": null
                },
                "publicKey": null
            }],
            "cards": null
        }))
        .unwrap();
        let out = AuthenticationDevice::sanitize_document(doc);
        assert_eq!(
            Value::Object(out),
            json!({
                "certificates": [{
                    "usage": {"value": "AUTH"},
                    "email": {"system": {"value": "MAIL"}, "value": "jean.dupont@esante.gouv.fr"}
                }]
            })
        );
    }

    #[test]
    fn test_empty_device_persists_as_empty_document() {
        let doc = AuthenticationDevice::default().to_persisted().unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_card_round_trip() {
        let device = AuthenticationDevice {
            cards: Some(vec![ProfessionalCard {
                card_type: Some(MosCode::new("CPS")),
                card_number: Some(MosText::new("99887766")),
                ..Default::default()
            }]),
            certificates: None,
        };
        assert_eq!(device.sanitize().unwrap(), device);
    }
}
