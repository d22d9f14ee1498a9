//! Conversions between domain documents and BSON.

use chrono::SecondsFormat;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, Bson, Document as BsonDocument};
use serde_json::{Map, Value};

use paybill_domain::document::{Document, Fields, ID_FIELD};
use paybill_domain::id::DocumentId;
use paybill_domain::query::{Direction, Query};

use crate::error::StorageError;

pub(crate) fn object_id(id: DocumentId) -> ObjectId {
    ObjectId::from_bytes(id.bytes())
}

pub(crate) fn document_id(value: Bson) -> Result<DocumentId, StorageError> {
    match value {
        Bson::ObjectId(oid) => Ok(DocumentId::from_bytes(oid.bytes())),
        other => Err(StorageError::UnsupportedId(other)),
    }
}

/// Filter selecting one document by id.
pub(crate) fn by_id(id: DocumentId) -> BsonDocument {
    let mut filter = BsonDocument::new();
    filter.insert(ID_FIELD, object_id(id));
    filter
}

/// JSON fields to a BSON document.
pub(crate) fn to_bson(fields: &Fields) -> Result<BsonDocument, StorageError> {
    Ok(bson::to_document(fields)?)
}

/// A stored BSON document to a domain document.
pub(crate) fn from_bson(mut raw: BsonDocument) -> Result<Document, StorageError> {
    let id = document_id(raw.remove(ID_FIELD).unwrap_or(Bson::Null))?;
    Ok(Document::new(id, object_to_json(raw)))
}

/// Convert a batch of stored documents. Documents whose `_id` is not an
/// object id are logged and skipped.
pub(crate) fn from_bson_batch(raw: Vec<BsonDocument>) -> Vec<Document> {
    raw.into_iter()
        .filter_map(|doc| match from_bson(doc) {
            Ok(doc) => Some(doc),
            Err(err) => {
                tracing::warn!(error = %err, "skipping stored document");
                None
            }
        })
        .collect()
}

fn object_to_json(raw: BsonDocument) -> Map<String, Value> {
    raw.into_iter()
        .map(|(key, value)| (key, to_json(value)))
        .collect()
}

/// Plain JSON for a BSON value: dates as RFC 3339 strings with
/// milliseconds, object ids as hex, everything else as relaxed extended
/// JSON.
fn to_json(value: Bson) -> Value {
    match value {
        Bson::Document(doc) => Value::Object(object_to_json(doc)),
        Bson::Array(items) => Value::Array(items.into_iter().map(to_json).collect()),
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => {
            match chrono::DateTime::from_timestamp_millis(dt.timestamp_millis()) {
                Some(utc) => Value::String(utc.to_rfc3339_opts(SecondsFormat::Millis, true)),
                None => Bson::DateTime(dt).into_relaxed_extjson(),
            }
        }
        other => other.into_relaxed_extjson(),
    }
}

/// Equality filter for a query.
pub(crate) fn filter(query: &Query) -> BsonDocument {
    let mut filter = BsonDocument::new();
    if let Some(m) = &query.filter {
        filter.insert(m.field.clone(), m.value.clone());
    }
    filter
}

/// Sort specification for a query, if it asks for one.
pub(crate) fn sort(query: &Query) -> Option<BsonDocument> {
    query.sort.as_ref().map(|key| {
        let order = match key.direction {
            Direction::Ascending => 1,
            Direction::Descending => -1,
        };
        let mut sort = BsonDocument::new();
        sort.insert(key.field.clone(), order);
        sort
    })
}
