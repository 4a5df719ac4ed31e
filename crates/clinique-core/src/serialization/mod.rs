//! Document sanitization and the persisted/DTO conversion layer.
//!
//! Every MOS type declares a field table listing its typed children. A single
//! traversal, [`sanitize_by_schema`], walks a document with that table: `null`
//! keys are dropped, scalars and untyped arrays are copied as-is, and typed
//! children are handed to their own sanitizer.

mod dto;

pub use dto::*;

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// A JSON object as stored in a collection.
pub type Document = Map<String, Value>;

/// Document-level sanitizer of one MOS type.
pub type SanitizeFn = fn(Document) -> Document;

/// Key holding the storage identity of a persisted document.
pub const PERSISTED_ID: &str = "_id";

/// Key holding the string identity of a DTO.
pub const DTO_ID: &str = "id";

/// Serialization errors.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON object, found {0}")]
    NotADocument(&'static str),

    #[error("Persisted document has no `_id`")]
    MissingIdentity,
}

pub type ModelResult<T> = Result<T, ModelError>;

/// Cardinality of a typed child field.
#[derive(Clone, Copy)]
pub enum FieldKind {
    One(SanitizeFn),
    Many(SanitizeFn),
}

/// One typed child of a MOS record.
#[derive(Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn one(name: &'static str, sanitize: SanitizeFn) -> Self {
        Self {
            name,
            kind: FieldKind::One(sanitize),
        }
    }

    pub const fn many(name: &'static str, sanitize: SanitizeFn) -> Self {
        Self {
            name,
            kind: FieldKind::Many(sanitize),
        }
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            FieldKind::One(_) => "one",
            FieldKind::Many(_) => "many",
        };
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &kind)
            .finish()
    }
}

impl FieldKind {
    fn apply(self, value: Value) -> Value {
        match (self, value) {
            (FieldKind::One(sanitize), Value::Object(child)) => Value::Object(sanitize(child)),
            (FieldKind::Many(sanitize), Value::Array(items)) => Value::Array(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::Null => None,
                        Value::Object(child) => Some(Value::Object(sanitize(child))),
                        other => Some(other),
                    })
                    .collect(),
            ),
            // Shape mismatch: leave the value for the caller to reject.
            (_, other) => other,
        }
    }
}

/// Sanitize `document` against a field table.
pub fn sanitize_by_schema(fields: &[Field], document: Document) -> Document {
    document
        .into_iter()
        .filter_map(|(key, value)| {
            if value.is_null() {
                return None;
            }
            let value = match fields.iter().find(|field| field.name == key) {
                Some(field) => field.kind.apply(value),
                None => value,
            };
            Some((key, value))
        })
        .collect()
}

/// Serialize a required number, refusing NaN and infinities.
///
/// `serde_json` would otherwise write them as `null`, which sanitization
/// then strips.
pub fn serialize_finite<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return Err(serde::ser::Error::custom(format!(
            "number {value} cannot be stored in a JSON document"
        )));
    }
    serializer.serialize_f64(*value)
}

/// Name of a JSON value's type, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Serializer contract shared by every MOS value type and entity.
pub trait MosSerializer: Serialize + DeserializeOwned {
    /// Typed children of this record, keyed by persisted name.
    const FIELDS: &'static [Field];

    /// Strip absent fields and sanitize typed children. Never fails.
    fn sanitize_document(document: Document) -> Document {
        sanitize_by_schema(Self::FIELDS, document)
    }

    /// Produce the persisted form of this value.
    fn to_persisted(&self) -> ModelResult<Document> {
        match serde_json::to_value(self)? {
            Value::Object(document) => Ok(Self::sanitize_document(document)),
            other => Err(ModelError::NotADocument(value_kind(&other))),
        }
    }

    /// Typed round trip through the sanitized document.
    fn sanitize(&self) -> ModelResult<Self> {
        let document = self.to_persisted()?;
        Ok(serde_json::from_value(Value::Object(document))?)
    }

    /// Convert a stored document (carrying `_id`) into a DTO.
    fn from_persisted(stored: Document) -> ModelResult<Dto<Self>> {
        let (id, rest) = split_identity(stored);
        let id = id.ok_or(ModelError::MissingIdentity)?;
        let value = serde_json::from_value(Value::Object(Self::sanitize_document(rest)))?;
        Ok(Dto { id, value })
    }
}

/// Remove `_id` from a stored document, rendering it as a string.
pub fn split_identity(mut stored: Document) -> (Option<String>, Document) {
    let id = match stored.remove(PERSISTED_ID) {
        None | Some(Value::Null) => None,
        Some(Value::String(id)) => Some(id),
        Some(other) => Some(other.to_string()),
    };
    (id, stored)
}

/// Document-level read path: `{..d, _id}` becomes `{..sanitize(d), id}`.
pub fn document_to_dto(stored: Document, sanitize: SanitizeFn) -> Document {
    let (id, rest) = split_identity(stored);
    let mut dto = sanitize(rest);
    if let Some(id) = id {
        dto.insert(DTO_ID.to_string(), Value::String(id));
    }
    dto
}

/// Parse a JSON object literal into a [`Document`].
pub fn document_from_value(value: Value) -> ModelResult<Document> {
    match value {
        Value::Object(document) => Ok(document),
        other => Err(ModelError::NotADocument(value_kind(&other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn child(document: Document) -> Document {
        sanitize_by_schema(&[], document)
    }

    const PARENT: &[Field] = &[Field::one("single", child), Field::many("list", child)];

    fn doc(value: Value) -> Document {
        document_from_value(value).unwrap()
    }

    #[test]
    fn test_nulls_removed_at_every_level() {
        let out = sanitize_by_schema(
            PARENT,
            doc(json!({
                "keep": "x",
                "drop": null,
                "single": {"a": 1, "b": null},
                "list": [{"c": null, "d": 2}]
            })),
        );
        assert_eq!(
            Value::Object(out),
            json!({"keep": "x", "single": {"a": 1}, "list": [{"d": 2}]})
        );
    }

    #[test]
    fn test_null_list_elements_dropped() {
        let out = sanitize_by_schema(PARENT, doc(json!({"list": [null, {"a": 1}, null]})));
        assert_eq!(Value::Object(out), json!({"list": [{"a": 1}]}));
    }

    #[test]
    fn test_untyped_arrays_copied() {
        let out = sanitize_by_schema(PARENT, doc(json!({"names": ["a", "b"], "empty": []})));
        assert_eq!(Value::Object(out), json!({"names": ["a", "b"], "empty": []}));
    }

    #[test]
    fn test_shape_mismatch_left_untouched() {
        let out = sanitize_by_schema(PARENT, doc(json!({"single": "oops", "list": 3})));
        assert_eq!(Value::Object(out), json!({"single": "oops", "list": 3}));
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let input = doc(json!({"single": {"a": null}, "list": [null], "x": null}));
        let once = sanitize_by_schema(PARENT, input);
        let twice = sanitize_by_schema(PARENT, once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_document_to_dto_moves_identity() {
        let stored = doc(json!({"_id": "abc", "single": {"a": null}}));
        let dto = document_to_dto(stored, |d| sanitize_by_schema(PARENT, d));
        assert_eq!(Value::Object(dto), json!({"id": "abc", "single": {}}));
    }

    #[test]
    fn test_non_string_identity_rendered() {
        let (id, rest) = split_identity(doc(json!({"_id": 42, "x": 1})));
        assert_eq!(id.as_deref(), Some("42"));
        assert!(!rest.contains_key("_id"));
    }

    #[test]
    fn test_document_from_value_rejects_arrays() {
        let err = document_from_value(json!([1])).unwrap_err();
        assert!(matches!(err, ModelError::NotADocument("array")));
    }
}
