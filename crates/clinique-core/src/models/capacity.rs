//! Capacity measures and the capacity blocks that group them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{MosCode, MosDate, MosIdentifier, MosMetadata, MosNumeric, MosText};
use crate::serialization::{sanitize_by_schema, Document, Field, MosSerializer};

/// Shared capacity fields (beds, places...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MosCapacity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nature: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporality: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<MosNumeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<MosText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<MosNumeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_on: Option<MosDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

const CAPACITY_FIELDS: &[Field] = &[
    Field::one("nature", MosCode::sanitize_document),
    Field::one("status", MosCode::sanitize_document),
    Field::one("temporality", MosCode::sanitize_document),
    Field::one("count", MosNumeric::sanitize_document),
    Field::one("precision", MosText::sanitize_document),
    Field::one("variation", MosNumeric::sanitize_document),
    Field::one("sourceType", MosCode::sanitize_document),
    Field::one("lastUpdated", MosDate::sanitize_document),
    Field::one("observedOn", MosDate::sanitize_document),
    Field::one("provenance", MosMetadata::sanitize_document),
];

impl MosSerializer for MosCapacity {
    const FIELDS: &'static [Field] = CAPACITY_FIELDS;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClosedCapacity {
    #[serde(flatten)]
    pub capacity: MosCapacity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closure_type: Option<MosCode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SupplementaryCapacity {
    #[serde(flatten)]
    pub capacity: MosCapacity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bed_type: Option<MosCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crisis_type: Option<MosCode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct InstalledCapacity {
    #[serde(flatten)]
    pub capacity: MosCapacity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_year: Option<MosDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AvailableCapacity {
    #[serde(flatten)]
    pub capacity: MosCapacity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender_scope: Option<MosCode>,
}

/// Discriminator of [`CapacityMeasure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureKind {
    General,
    Closed,
    Supplementary,
    Installed,
    Available,
}

/// Persisted key of the discriminator.
pub const MEASURE_KIND_TAG: &str = "measureKind";

/// Keys carried by exactly one variant.
const VARIANT_KEYS: &[&str] = &[
    "closureType",
    "bedType",
    "crisisType",
    "referenceYear",
    "genderScope",
];

impl MeasureKind {
    pub const ALL: [MeasureKind; 5] = [
        MeasureKind::General,
        MeasureKind::Closed,
        MeasureKind::Supplementary,
        MeasureKind::Installed,
        MeasureKind::Available,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MeasureKind::General => "general",
            MeasureKind::Closed => "closed",
            MeasureKind::Supplementary => "supplementary",
            MeasureKind::Installed => "installed",
            MeasureKind::Available => "available",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    /// Typed fields specific to this variant.
    fn variant_fields(self) -> &'static [Field] {
        match self {
            MeasureKind::General => &[],
            MeasureKind::Closed => CLOSED_FIELDS,
            MeasureKind::Supplementary => SUPPLEMENTARY_FIELDS,
            MeasureKind::Installed => INSTALLED_FIELDS,
            MeasureKind::Available => AVAILABLE_FIELDS,
        }
    }
}

const CLOSED_FIELDS: &[Field] = &[Field::one("closureType", MosCode::sanitize_document)];

const SUPPLEMENTARY_FIELDS: &[Field] = &[
    Field::one("bedType", MosCode::sanitize_document),
    Field::one("crisisType", MosCode::sanitize_document),
];

const INSTALLED_FIELDS: &[Field] = &[Field::one("referenceYear", MosDate::sanitize_document)];

const AVAILABLE_FIELDS: &[Field] = &[Field::one("genderScope", MosCode::sanitize_document)];

impl std::fmt::Display for MeasureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One capacity measure, discriminated by `measureKind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "measureKind", rename_all = "lowercase")]
pub enum CapacityMeasure {
    General(MosCapacity),
    Closed(ClosedCapacity),
    Supplementary(SupplementaryCapacity),
    Installed(InstalledCapacity),
    Available(AvailableCapacity),
}

impl CapacityMeasure {
    pub fn kind(&self) -> MeasureKind {
        match self {
            CapacityMeasure::General(_) => MeasureKind::General,
            CapacityMeasure::Closed(_) => MeasureKind::Closed,
            CapacityMeasure::Supplementary(_) => MeasureKind::Supplementary,
            CapacityMeasure::Installed(_) => MeasureKind::Installed,
            CapacityMeasure::Available(_) => MeasureKind::Available,
        }
    }

    /// Shared fields, whatever the variant.
    pub fn capacity(&self) -> &MosCapacity {
        match self {
            CapacityMeasure::General(capacity) => capacity,
            CapacityMeasure::Closed(closed) => &closed.capacity,
            CapacityMeasure::Supplementary(supplementary) => &supplementary.capacity,
            CapacityMeasure::Installed(installed) => &installed.capacity,
            CapacityMeasure::Available(available) => &available.capacity,
        }
    }
}

impl Default for CapacityMeasure {
    fn default() -> Self {
        CapacityMeasure::General(MosCapacity::default())
    }
}

impl MosSerializer for CapacityMeasure {
    const FIELDS: &'static [Field] = CAPACITY_FIELDS;

    fn sanitize_document(mut document: Document) -> Document {
        let kind = match document.get(MEASURE_KIND_TAG) {
            None | Some(Value::Null) => Some(MeasureKind::General),
            Some(Value::String(tag)) => MeasureKind::parse(tag),
            Some(_) => None,
        };

        // Unknown discriminator: keep it, sanitize the shared fields only.
        let Some(kind) = kind else {
            return sanitize_by_schema(CAPACITY_FIELDS, document);
        };

        let own = kind.variant_fields();
        document.retain(|key, _| {
            !VARIANT_KEYS.contains(&key.as_str()) || own.iter().any(|field| field.name == key)
        });
        document.insert(
            MEASURE_KIND_TAG.to_string(),
            Value::String(kind.as_str().to_string()),
        );

        sanitize_by_schema(own, sanitize_by_schema(CAPACITY_FIELDS, document))
    }
}

/// Accommodation capacity of a structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationCapacity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<MosIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measures: Option<Vec<CapacityMeasure>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for AccommodationCapacity {
    const FIELDS: &'static [Field] = &[
        Field::one("identifier", MosIdentifier::sanitize_document),
        Field::many("measures", CapacityMeasure::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}

/// Adaptation capacity of a structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdaptationCapacity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<MosIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measures: Option<Vec<CapacityMeasure>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<MosMetadata>,
}

impl MosSerializer for AdaptationCapacity {
    const FIELDS: &'static [Field] = &[
        Field::one("identifier", MosIdentifier::sanitize_document),
        Field::many("measures", CapacityMeasure::sanitize_document),
        Field::one("provenance", MosMetadata::sanitize_document),
    ];
}
