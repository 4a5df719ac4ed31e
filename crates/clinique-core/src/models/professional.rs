//! Health professional and the practices attached to them.

use serde::{Deserialize, Serialize};

use super::{
    AuthenticationDevice, MosAddress, MosCode, MosDate, MosDiploma, MosIdentifier, MosMailbox,
    MosMetadata, MosSchedule, MosTelecom, MosText, PhysicalPerson,
};
use crate::serialization::{Field, MosSerializer};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Professional {
    /// Professional person identifier (idPP).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pp_identifier: Option<MosIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pp_identifier_type: Option<MosCode>,
    /// National identifier (RPPS / ADELI based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_id: Option<MosIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<PhysicalPerson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diplomas: Option<Vec<MosDiploma>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correspondence_addresses: Option<Vec<MosAddress>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecoms: Option<Vec<MosTelecom>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_mailboxes: Option<Vec<MosMailbox>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practices: Option<Vec<ProfessionalPractice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for Professional {
    const FIELDS: &'static [Field] = &[
        Field::one("ppIdentifier", MosIdentifier::sanitize_document),
        Field::one("ppIdentifierType", MosCode::sanitize_document),
        Field::one("nationalId", MosIdentifier::sanitize_document),
        Field::one("person", PhysicalPerson::sanitize_document),
        Field::many("diplomas", MosDiploma::sanitize_document),
        Field::many("correspondenceAddresses", MosAddress::sanitize_document),
        Field::many("telecoms", MosTelecom::sanitize_document),
        Field::many("secureMailboxes", MosMailbox::sanitize_document),
        Field::many("practices", ProfessionalPractice::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// One professional practice (exercice professionnel).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalPractice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practice_title: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practice_family_name: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practice_given_name: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_title: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_category: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_diploma: Option<MosDiploma>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operational_situations: Option<Vec<OperationalSituation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_situations: Option<Vec<ExerciseSituation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub know_how: Option<Vec<KnowHow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_registration: Option<OrderRegistration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_attributions: Option<Vec<SpecialAttribution>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_levels: Option<Vec<TrainingLevel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_devices: Option<Vec<AuthenticationDevice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for ProfessionalPractice {
    const FIELDS: &'static [Field] = &[
        Field::one("practiceTitle", MosCode::sanitize_document),
        Field::one("practiceFamilyName", MosText::sanitize_document),
        Field::one("practiceGivenName", MosText::sanitize_document),
        Field::one("professionalTitle", MosCode::sanitize_document),
        Field::one("professionalCategory", MosCode::sanitize_document),
        Field::one("startDate", MosDate::sanitize_document),
        Field::one("endDate", MosDate::sanitize_document),
        Field::one("referenceDiploma", MosDiploma::sanitize_document),
        Field::many("operationalSituations", OperationalSituation::sanitize_document),
        Field::many("exerciseSituations", ExerciseSituation::sanitize_document),
        Field::many("knowHow", KnowHow::sanitize_document),
        Field::one("orderRegistration", OrderRegistration::sanitize_document),
        Field::many("specialAttributions", SpecialAttribution::sanitize_document),
        Field::many("trainingLevels", TrainingLevel::sanitize_document),
        Field::many("authenticationDevices", AuthenticationDevice::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// Where and how a practice is operated on site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OperationalSituation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<MosIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_mode: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_competency: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<MosSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reimbursement_sector: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_access_option: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electronic_payment_accepted: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecoms: Option<Vec<MosTelecom>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for OperationalSituation {
    const FIELDS: &'static [Field] = &[
        Field::one("identifier", MosIdentifier::sanitize_document),
        Field::one("siteMode", MosCode::sanitize_document),
        Field::one("specificCompetency", MosCode::sanitize_document),
        Field::one("schedule", MosSchedule::sanitize_document),
        Field::one("reimbursementSector", MosCode::sanitize_document),
        Field::one("careAccessOption", MosCode::sanitize_document),
        Field::one("electronicPaymentAccepted", MosCode::sanitize_document),
        Field::many("telecoms", MosTelecom::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// Administrative situation of a practice (role, mode, statuses).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSituation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_type: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_mode: Option<MosCode>,
    /// Health insurance (AM) number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_number: Option<MosIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_start: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_end: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_kind: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital_status: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub military_status: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pharmacy_status: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pharmacy_sector: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pharmacy_sub_sector: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liberal_act_type: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sisa_status: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecoms: Option<Vec<MosTelecom>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<MosAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_mailboxes: Option<Vec<MosMailbox>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for ExerciseSituation {
    const FIELDS: &'static [Field] = &[
        Field::one("role", MosCode::sanitize_document),
        Field::one("roleType", MosCode::sanitize_document),
        Field::one("exerciseMode", MosCode::sanitize_document),
        Field::one("insuranceNumber", MosIdentifier::sanitize_document),
        Field::one("activityStart", MosDate::sanitize_document),
        Field::one("activityEnd", MosDate::sanitize_document),
        Field::one("activityKind", MosCode::sanitize_document),
        Field::one("hospitalStatus", MosCode::sanitize_document),
        Field::one("militaryStatus", MosCode::sanitize_document),
        Field::one("pharmacyStatus", MosCode::sanitize_document),
        Field::one("pharmacySector", MosCode::sanitize_document),
        Field::one("pharmacySubSector", MosCode::sanitize_document),
        Field::one("liberalActType", MosCode::sanitize_document),
        Field::one("sisaStatus", MosCode::sanitize_document),
        Field::many("telecoms", MosTelecom::sanitize_document),
        Field::one("address", MosAddress::sanitize_document),
        Field::many("secureMailboxes", MosMailbox::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct KnowHow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub know_how_type: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abandoned_on: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for KnowHow {
    const FIELDS: &'static [Field] = &[
        Field::one("knowHowType", MosCode::sanitize_document),
        Field::one("startDate", MosDate::sanitize_document),
        Field::one("endDate", MosDate::sanitize_document),
        Field::one("abandonedOn", MosDate::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// Registration with a professional order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderRegistration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinction_code: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_on: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub struck_off_on: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for OrderRegistration {
    const FIELDS: &'static [Field] = &[
        Field::one("order", MosCode::sanitize_document),
        Field::one("distinctionCode", MosCode::sanitize_document),
        Field::one("registeredOn", MosDate::sanitize_document),
        Field::one("struckOffOn", MosDate::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SpecialAttribution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognized_from: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognized_until: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for SpecialAttribution {
    const FIELDS: &'static [Field] = &[
        Field::one("attribution", MosCode::sanitize_document),
        Field::one("recognizedFrom", MosDate::sanitize_document),
        Field::one("recognizedUntil", MosDate::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrainingLevel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diploma: Option<MosDiploma>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_year: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for TrainingLevel {
    const FIELDS: &'static [Field] = &[
        Field::one("diploma", MosDiploma::sanitize_document),
        Field::one("academicYear", MosCode::sanitize_document),
        Field::one("endDate", MosDate::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Certificate, ProfessionalCard};
    use crate::serialization::document_from_value;
    use serde_json::{json, Value};

    #[test]
    fn test_deep_nulls_removed() {
        let doc = document_from_value(json!({
            "ppIdentifier": {"value": "IDPP-123456", "qualifier": null},
            "person": {
                "birthFamilyName": "Dupont",
                "givenNames": ["Jean"],
                "sex": {"value": "M", "label": null}
            },
            "practices": [{
                "exerciseSituations": [{
                    "exerciseMode": {"value": "LIB", "codeSystemURN": null},
                    "insuranceNumber": {"value": "AM-12345", "identifierType": null}
                }],
                "authenticationDevices": [{
                    "cards": [{"cardNumber": {"value": "99887766", "language": null}}]
                }],
                "orderRegistration": null
            }]
        }))
        .unwrap();

        let out = Professional::sanitize_document(doc);
        assert_eq!(
            Value::Object(out),
            json!({
                "ppIdentifier": {"value": "IDPP-123456"},
                "person": {
                    "birthFamilyName": "Dupont",
                    "givenNames": ["Jean"],
                    "sex": {"value": "M"}
                },
                "practices": [{
                    "exerciseSituations": [{
                        "exerciseMode": {"value": "LIB"},
                        "insuranceNumber": {"value": "AM-12345"}
                    }],
                    "authenticationDevices": [{
                        "cards": [{"cardNumber": {"value": "99887766"}}]
                    }]
                }]
            })
        );
    }

    #[test]
    fn test_embedded_device_round_trip() {
        let professional = Professional {
            pp_identifier: Some(MosIdentifier::new("IDPP-123456")),
            practices: Some(vec![ProfessionalPractice {
                authentication_devices: Some(vec![AuthenticationDevice {
                    cards: Some(vec![ProfessionalCard::default()]),
                    certificates: Some(vec![Certificate {
                        usage: Some(MosCode::new("AUTH")),
                        ..Default::default()
                    }]),
                }]),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let sanitized = professional.sanitize().unwrap();
        assert_eq!(sanitized, professional);
        assert_eq!(sanitized.sanitize().unwrap(), sanitized);
    }
}
