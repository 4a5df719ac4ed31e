//! Authorizations granted to a structure: care activities, equipment, capacities.

use serde::{Deserialize, Serialize};

use super::{
    AccommodationCapacity, AdaptationCapacity, MosCode, MosDate, MosIdentifier, MosIndicator,
    MosMetadata, MosText,
};
use crate::serialization::{Field, MosSerializer};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Authorization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<Vec<MosIdentifier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_activities: Option<Vec<AuthorizedCareActivity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_activities: Option<Vec<OtherAuthorizedActivity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognition_activities: Option<Vec<RecognitionActivity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teaching_activities: Option<Vec<TeachingActivity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_activities: Option<Vec<SocialActivity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heavy_equipments: Option<Vec<HeavyEquipment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercised_capacities: Option<Vec<ExercisedActivityCapacity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for Authorization {
    const FIELDS: &'static [Field] = &[
        Field::many("identifiers", MosIdentifier::sanitize_document),
        Field::many("careActivities", AuthorizedCareActivity::sanitize_document),
        Field::many("otherActivities", OtherAuthorizedActivity::sanitize_document),
        Field::many("recognitionActivities", RecognitionActivity::sanitize_document),
        Field::many("teachingActivities", TeachingActivity::sanitize_document),
        Field::many("socialActivities", SocialActivity::sanitize_document),
        Field::many("heavyEquipments", HeavyEquipment::sanitize_document),
        Field::many("exercisedCapacities", ExercisedActivityCapacity::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// Authorized care activity (activité de soins).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedCareActivity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_number: Option<MosIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modality: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_implementation: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppressed: Option<MosIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspended: Option<MosIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for AuthorizedCareActivity {
    const FIELDS: &'static [Field] = &[
        Field::one("authorizationNumber", MosIdentifier::sanitize_document),
        Field::one("decisionDate", MosDate::sanitize_document),
        Field::one("activity", MosCode::sanitize_document),
        Field::one("modality", MosCode::sanitize_document),
        Field::one("mode", MosCode::sanitize_document),
        Field::one("firstImplementation", MosDate::sanitize_document),
        Field::one("endDate", MosDate::sanitize_document),
        Field::one("suppressed", MosIndicator::sanitize_document),
        Field::one("suspended", MosIndicator::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OtherAuthorizedActivity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_number: Option<MosIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modality: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_implementation: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for OtherAuthorizedActivity {
    const FIELDS: &'static [Field] = &[
        Field::one("authorizationNumber", MosIdentifier::sanitize_document),
        Field::one("decisionDate", MosDate::sanitize_document),
        Field::one("activity", MosCode::sanitize_document),
        Field::one("modality", MosCode::sanitize_document),
        Field::one("form", MosCode::sanitize_document),
        Field::one("mode", MosCode::sanitize_document),
        Field::one("firstImplementation", MosDate::sanitize_document),
        Field::one("endDate", MosDate::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// Activity subject to recognition or certification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionActivity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognition_number: Option<MosIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modality: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certification_number: Option<MosIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certification_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regional_recognition: Option<MosIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for RecognitionActivity {
    const FIELDS: &'static [Field] = &[
        Field::one("recognitionNumber", MosIdentifier::sanitize_document),
        Field::one("decisionDate", MosDate::sanitize_document),
        Field::one("modality", MosCode::sanitize_document),
        Field::one("code", MosCode::sanitize_document),
        Field::one("form", MosCode::sanitize_document),
        Field::one("certificationNumber", MosIdentifier::sanitize_document),
        Field::one("certificationDate", MosDate::sanitize_document),
        Field::one("regionalRecognition", MosIndicator::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeachingActivity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipline_group_level1: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipline_group_level2: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipline_group_level3: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipline: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_mode: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_on: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppressed: Option<MosIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for TeachingActivity {
    const FIELDS: &'static [Field] = &[
        Field::one("disciplineGroupLevel1", MosCode::sanitize_document),
        Field::one("disciplineGroupLevel2", MosCode::sanitize_document),
        Field::one("disciplineGroupLevel3", MosCode::sanitize_document),
        Field::one("discipline", MosCode::sanitize_document),
        Field::one("operatingMode", MosCode::sanitize_document),
        Field::one("authorizedOn", MosDate::sanitize_document),
        Field::one("suppressed", MosIndicator::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// Social or medico-social activity, with the capacity it operates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SocialActivity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_on: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_updated_on: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_installed_on: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_ends_on: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_suspended_on: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipline_group_level1: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipline_group_level2: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipline_group_level3: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipline: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_approval: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regional_approval: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognition_source: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internationalization_source: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<ExercisedActivityCapacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for SocialActivity {
    const FIELDS: &'static [Field] = &[
        Field::one("authorizedOn", MosDate::sanitize_document),
        Field::one("authorizationUpdatedOn", MosDate::sanitize_document),
        Field::one("lastInstalledOn", MosDate::sanitize_document),
        Field::one("authorizationEndsOn", MosDate::sanitize_document),
        Field::one("authorizationSuspendedOn", MosDate::sanitize_document),
        Field::one("disciplineGroupLevel1", MosCode::sanitize_document),
        Field::one("disciplineGroupLevel2", MosCode::sanitize_document),
        Field::one("disciplineGroupLevel3", MosCode::sanitize_document),
        Field::one("discipline", MosCode::sanitize_document),
        Field::one("nationalApproval", MosCode::sanitize_document),
        Field::one("regionalApproval", MosCode::sanitize_document),
        Field::one("recognitionSource", MosCode::sanitize_document),
        Field::one("internationalizationSource", MosCode::sanitize_document),
        Field::one("capacity", ExercisedActivityCapacity::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// Heavy medical equipment (EML) authorization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HeavyEquipment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_number: Option<MosIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_implementation: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppressed: Option<MosIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for HeavyEquipment {
    const FIELDS: &'static [Field] = &[
        Field::one("authorizationNumber", MosIdentifier::sanitize_document),
        Field::one("equipment", MosCode::sanitize_document),
        Field::one("decisionDate", MosDate::sanitize_document),
        Field::one("firstImplementation", MosDate::sanitize_document),
        Field::one("endDate", MosDate::sanitize_document),
        Field::one("serialNumber", MosText::sanitize_document),
        Field::one("brand", MosText::sanitize_document),
        Field::one("model", MosText::sanitize_document),
        Field::one("suppressed", MosIndicator::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// Capacity exercised under an authorization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExercisedActivityCapacity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_aid_habilitation: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financing_mode: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<AccommodationCapacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adaptation: Option<AdaptationCapacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for ExercisedActivityCapacity {
    const FIELDS: &'static [Field] = &[
        Field::one("socialAidHabilitation", MosCode::sanitize_document),
        Field::one("financingMode", MosCode::sanitize_document),
        Field::one("accommodation", AccommodationCapacity::sanitize_document),
        Field::one("adaptation", AdaptationCapacity::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}
