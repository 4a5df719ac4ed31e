//! Person under care (personne prise en charge) and their life context.

use serde::{Deserialize, Serialize};

use super::{
    MosAddress, MosCode, MosDate, MosDateTime, MosDiploma, MosIdentifier, MosIndicator,
    MosMeasure, MosMetadata, MosTelecom, MosText, PhysicalPerson,
};
use crate::serialization::{Field, MosSerializer};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PersonUnderCare {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_identity: Option<NationalHealthIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_identifiers: Option<Vec<MosIdentifier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<PhysicalPerson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_preference: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correspondence_addresses: Option<Vec<MosAddress>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecoms: Option<Vec<MosTelecom>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_life: Option<DailyLife>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_life: Option<ProfessionalLife>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_life: Option<SocialLife>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_life: Option<SchoolLife>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_stoppage: Option<WorkStoppage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employments: Option<Vec<Employment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<Vec<Observation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for PersonUnderCare {
    const FIELDS: &'static [Field] = &[
        Field::one("nationalIdentity", NationalHealthIdentity::sanitize_document),
        Field::many("localIdentifiers", MosIdentifier::sanitize_document),
        Field::one("person", PhysicalPerson::sanitize_document),
        Field::one("communicationPreference", MosCode::sanitize_document),
        Field::many("contacts", Contact::sanitize_document),
        Field::many("correspondenceAddresses", MosAddress::sanitize_document),
        Field::many("telecoms", MosTelecom::sanitize_document),
        Field::one("dailyLife", DailyLife::sanitize_document),
        Field::one("professionalLife", ProfessionalLife::sanitize_document),
        Field::one("socialLife", SocialLife::sanitize_document),
        Field::one("schoolLife", SchoolLife::sanitize_document),
        Field::one("workStoppage", WorkStoppage::sanitize_document),
        Field::many("employments", Employment::sanitize_document),
        Field::many("observations", Observation::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// National health identity (INS).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NationalHealthIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matricule: Option<MosIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_name: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_given_names: Option<Vec<MosText>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<MosDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_birth_given_name: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_given_name: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for NationalHealthIdentity {
    const FIELDS: &'static [Field] = &[
        Field::one("matricule", MosIdentifier::sanitize_document),
        Field::one("birthName", MosText::sanitize_document),
        Field::many("birthGivenNames", MosText::sanitize_document),
        Field::one("sex", MosCode::sanitize_document),
        Field::one("birthDate", MosDateTime::sanitize_document),
        Field::one("birthPlace", MosCode::sanitize_document),
        Field::one("firstBirthGivenName", MosText::sanitize_document),
        Field::one("usedGivenName", MosText::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// Relative, carer or trusted person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<PhysicalPerson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecoms: Option<Vec<MosTelecom>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<MosAddress>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for Contact {
    const FIELDS: &'static [Field] = &[
        Field::one("relation", MosCode::sanitize_document),
        Field::one("person", PhysicalPerson::sanitize_document),
        Field::one("organization", MosText::sanitize_document),
        Field::many("telecoms", MosTelecom::sanitize_document),
        Field::many("addresses", MosAddress::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DailyLife {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situations: Option<Vec<MosCode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub household_composition: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for DailyLife {
    const FIELDS: &'static [Field] = &[
        Field::many("situations", MosCode::sanitize_document),
        Field::one("need", MosCode::sanitize_document),
        Field::one("householdComposition", MosCode::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalLife {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_worked: Option<MosIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diploma: Option<MosDiploma>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situation: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unemployment_situation: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for ProfessionalLife {
    const FIELDS: &'static [Field] = &[
        Field::one("hasWorked", MosIndicator::sanitize_document),
        Field::one("diploma", MosDiploma::sanitize_document),
        Field::one("situation", MosCode::sanitize_document),
        Field::one("unemploymentSituation", MosCode::sanitize_document),
        Field::one("need", MosCode::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SocialLife {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socialization_type: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for SocialLife {
    const FIELDS: &'static [Field] = &[
        Field::one("socializationType", MosCode::sanitize_document),
        Field::one("need", MosCode::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SchoolLife {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schooling_type: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for SchoolLife {
    const FIELDS: &'static [Field] = &[
        Field::one("schoolingType", MosCode::sanitize_document),
        Field::one("need", MosCode::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// Sick leave and the follow-up meetings it triggered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkStoppage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub met_social_services: Option<MosIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_services_meeting_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub met_physician: Option<MosIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physician_meeting_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for WorkStoppage {
    const FIELDS: &'static [Field] = &[
        Field::one("startDate", MosDate::sanitize_document),
        Field::one("reason", MosCode::sanitize_document),
        Field::one("metSocialServices", MosIndicator::sanitize_document),
        Field::one("socialServicesMeetingDate", MosDate::sanitize_document),
        Field::one("metPhysician", MosIndicator::sanitize_document),
        Field::one("physicianMeetingDate", MosDate::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Employment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disability_adapted: Option<MosIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for Employment {
    const FIELDS: &'static [Field] = &[
        Field::one("title", MosText::sanitize_document),
        Field::one("startDate", MosDate::sanitize_document),
        Field::one("endDate", MosDate::sanitize_document),
        Field::one("status", MosCode::sanitize_document),
        Field::one("disabilityAdapted", MosIndicator::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// Clinical or social observation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<MosIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_at: Option<MosDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anatomical_site: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_position: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_moment: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effort_level: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lab_type: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_count: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<ObservationResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for Observation {
    const FIELDS: &'static [Field] = &[
        Field::one("identifier", MosIdentifier::sanitize_document),
        Field::one("status", MosCode::sanitize_document),
        Field::one("category", MosCode::sanitize_document),
        Field::one("code", MosCode::sanitize_document),
        Field::one("relevanceDate", MosDate::sanitize_document),
        Field::one("availableAt", MosDateTime::sanitize_document),
        Field::one("comment", MosText::sanitize_document),
        Field::one("anatomicalSite", MosCode::sanitize_document),
        Field::one("method", MosCode::sanitize_document),
        Field::one("bodyPosition", MosCode::sanitize_document),
        Field::one("measurementMoment", MosCode::sanitize_document),
        Field::one("effortLevel", MosCode::sanitize_document),
        Field::one("labType", MosCode::sanitize_document),
        Field::one("dayCount", MosCode::sanitize_document),
        Field::many("results", ObservationResult::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ObservationResult {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<MosCode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<MosMeasure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absence_reason: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_ranges: Option<Vec<ReferenceRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for ObservationResult {
    const FIELDS: &'static [Field] = &[
        Field::many("type", MosCode::sanitize_document),
        Field::one("value", MosMeasure::sanitize_document),
        Field::one("interpretation", MosCode::sanitize_document),
        Field::one("absenceReason", MosCode::sanitize_document),
        Field::many("referenceRanges", ReferenceRange::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<MosMeasure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<MosMeasure>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub range_type: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_range: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for ReferenceRange {
    const FIELDS: &'static [Field] = &[
        Field::one("low", MosMeasure::sanitize_document),
        Field::one("high", MosMeasure::sanitize_document),
        Field::one("type", MosCode::sanitize_document),
        Field::one("ageRange", MosCode::sanitize_document),
        Field::one("text", MosText::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}
