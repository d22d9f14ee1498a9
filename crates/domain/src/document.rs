//! Document — a schema-less JSON record with a storage-assigned identity.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::DocumentId;

/// Key under which a document's identifier is serialized.
pub const ID_FIELD: &str = "_id";

/// The fields of a document, keyed by name. No schema is enforced.
pub type Fields = Map<String, Value>;

/// A stored document: its identifier plus arbitrary fields.
///
/// Serializes flat, with the identifier under `_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Document {
    #[must_use]
    pub fn new(id: DocumentId, fields: Fields) -> Self {
        Self { id, fields }
    }

    /// Look up a top-level field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Whether the top-level `field` is a string equal to `value`.
    #[must_use]
    pub fn field_equals(&self, field: &str, value: &str) -> bool {
        matches!(self.get(field), Some(Value::String(s)) if s == value)
    }
}

/// Remove a client-supplied identifier from request fields.
///
/// Identity belongs to storage and is immutable.
#[must_use]
pub fn without_id(mut fields: Fields) -> Fields {
    fields.remove(ID_FIELD);
    fields
}

/// Merge `patch` into `target`, overwriting top-level fields.
///
/// Returns `true` when at least one field actually changed.
pub fn merge(target: &mut Fields, patch: Fields) -> bool {
    let mut changed = false;
    for (key, value) in patch {
        if target.get(&key) != Some(&value) {
            target.insert(key, value);
            changed = true;
        }
    }
    changed
}
