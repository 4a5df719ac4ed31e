//! Atomic MOS value types.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::serialization::{serialize_finite, Field, MosSerializer};

/// Format tag written on dates built from a calendar date.
pub const DATE_FORMAT: &str = "YYYY-MM-DD";

/// Format tag written on date-times built from a UTC instant.
pub const DATE_TIME_FORMAT: &str = "YYYY-MM-DDThh:mm:ssZ";

/// A coded value drawn from a nomenclature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MosCode {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_system_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_system_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_system_version: Option<String>,
    #[serde(rename = "codeSystemURN", skip_serializing_if = "Option::is_none")]
    pub code_system_urn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority_name: Option<String>,
}

impl MosCode {
    /// Bare code with no nomenclature attached.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }
}

impl MosSerializer for MosCode {
    const FIELDS: &'static [Field] = &[];
}

/// Free text with an optional language tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MosText {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl MosText {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
        }
    }

    pub fn with_language(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: Some(language.into()),
        }
    }
}

impl MosSerializer for MosText {
    const FIELDS: &'static [Field] = &[];
}

/// Calendar date as a tagged string. The value is not parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MosDate {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl MosDate {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            format: None,
        }
    }

    pub fn from_naive_date(date: NaiveDate) -> Self {
        Self {
            value: date.format("%Y-%m-%d").to_string(),
            format: Some(DATE_FORMAT.to_string()),
        }
    }
}

impl MosSerializer for MosDate {
    const FIELDS: &'static [Field] = &[];
}

/// Instant as a tagged string. The value is not parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MosDateTime {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl MosDateTime {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            format: None,
        }
    }

    pub fn from_utc(instant: DateTime<Utc>) -> Self {
        Self {
            value: instant.to_rfc3339_opts(SecondsFormat::Secs, true),
            format: Some(DATE_TIME_FORMAT.to_string()),
        }
    }
}

impl MosSerializer for MosDateTime {
    const FIELDS: &'static [Field] = &[];
}

/// Quantity with optional unit and comparator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MosMeasure {
    #[serde(serialize_with = "serialize_finite")]
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparator: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_system_name: Option<String>,
}

impl MosSerializer for MosMeasure {
    const FIELDS: &'static [Field] = &[
        Field::one("unit", MosCode::sanitize_document),
        Field::one("comparator", MosCode::sanitize_document),
    ];
}

/// Identifier issued by an external system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MosIdentifier {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuing_system_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuing_system_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuing_system_version: Option<String>,
    #[serde(rename = "issuingSystemURI", skip_serializing_if = "Option::is_none")]
    pub issuing_system_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<MosCode>,
}

impl MosIdentifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }
}

impl MosSerializer for MosIdentifier {
    const FIELDS: &'static [Field] = &[Field::one(
        "identifierType",
        MosCode::sanitize_document,
    )];
}

/// Authority responsible for a record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MetadataAuthority {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl MosSerializer for MetadataAuthority {
    const FIELDS: &'static [Field] = &[];
}

/// Provenance block attached to most MOS records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MosMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<Vec<MosIdentifier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<MosDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<MosDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<MosDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_authorities: Option<Vec<MetadataAuthority>>,
}

impl MosSerializer for MosMetadata {
    const FIELDS: &'static [Field] = &[
        Field::many("identifiers", MosIdentifier::sanitize_document),
        Field::one("version", MosText::sanitize_document),
        Field::one("comment", MosText::sanitize_document),
        Field::one("createdAt", MosDateTime::sanitize_document),
        Field::one("updatedAt", MosDateTime::sanitize_document),
        Field::one("endedAt", MosDateTime::sanitize_document),
        Field::many("responsibleAuthorities", MetadataAuthority::sanitize_document),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MosIndicator {
    pub value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosIndicator {
    pub fn new(value: bool) -> Self {
        Self {
            value,
            provenance: None,
        }
    }
}

impl MosSerializer for MosIndicator {
    const FIELDS: &'static [Field] = &[Field::one("provenance", MosMetadata::sanitize_document)];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MosNumeric {
    #[serde(serialize_with = "serialize_finite")]
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosNumeric {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            provenance: None,
        }
    }
}

impl MosSerializer for MosNumeric {
    const FIELDS: &'static [Field] = &[Field::one("provenance", MosMetadata::sanitize_document)];
}

/// A language spoken by a person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SpokenLanguage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for SpokenLanguage {
    const FIELDS: &'static [Field] = &[
        Field::one("language", MosCode::sanitize_document),
        Field::one("endDate", MosDate::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// Postal address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MosAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_type: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<MosText>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for MosAddress {
    const FIELDS: &'static [Field] = &[
        Field::one("addressType", MosCode::sanitize_document),
        Field::many("lines", MosText::sanitize_document),
        Field::one("city", MosText::sanitize_document),
        Field::one("country", MosCode::sanitize_document),
        Field::one("complement", MosText::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// Telecommunication endpoint (phone, email, fax...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MosTelecom {
    pub system: MosCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<MosCode>,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for MosTelecom {
    const FIELDS: &'static [Field] = &[
        Field::one("system", MosCode::sanitize_document),
        Field::one("usage", MosCode::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// Secure health messaging (MSS) mailbox.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MosMailbox {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for MosMailbox {
    const FIELDS: &'static [Field] = &[
        Field::one("usage", MosCode::sanitize_document),
        Field::one("organization", MosText::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MosDiploma {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diploma_type: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obtained_on: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuing_authority: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for MosDiploma {
    const FIELDS: &'static [Field] = &[
        Field::one("diplomaType", MosCode::sanitize_document),
        Field::one("title", MosText::sanitize_document),
        Field::one("obtainedOn", MosDate::sanitize_document),
        Field::one("issuingAuthority", MosText::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// Opening-hours slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MosSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for MosSchedule {
    const FIELDS: &'static [Field] = &[
        Field::one("day", MosCode::sanitize_document),
        Field::one("startTime", MosText::sanitize_document),
        Field::one("endTime", MosText::sanitize_document),
        Field::one("comment", MosText::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}
