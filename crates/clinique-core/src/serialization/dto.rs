//! Read-side representation of stored records.

use serde::{Deserialize, Serialize};

use super::{document_from_value, Document, ModelResult};

/// A stored record as handed to callers: the value plus its string identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dto<T> {
    pub id: String,
    #[serde(flatten)]
    pub value: T,
}

impl<T: Serialize> Dto<T> {
    /// Render as a single JSON object with `id` alongside the fields.
    pub fn to_document(&self) -> ModelResult<Document> {
        document_from_value(serde_json::to_value(self)?)
    }
}

impl<T> std::ops::Deref for Dto<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}
