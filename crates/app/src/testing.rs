//! In-memory [`DocumentStore`] used by the service tests.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use serde_json::Value;

use paybill_domain::collection::Collection;
use paybill_domain::document::{self, Document, Fields};
use paybill_domain::error::PaybillError;
use paybill_domain::id::DocumentId;
use paybill_domain::query::{Direction, Query};

use crate::ports::{DocumentStore, UpdateOutcome};

#[derive(Default)]
pub struct InMemoryStore {
    store: Mutex<HashMap<Collection, Vec<Document>>>,
    failing: bool,
}

impl InMemoryStore {
    /// A store whose every call fails with a storage error.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Insert a document directly, bypassing the port.
    pub fn seed(&self, collection: Collection, value: serde_json::Value) -> DocumentId {
        let fields: Fields = serde_json::from_value(value).unwrap();
        let id = DocumentId::generate();
        self.store
            .lock()
            .unwrap()
            .entry(collection)
            .or_default()
            .push(Document::new(id, fields));
        id
    }

    fn check(&self) -> Result<(), PaybillError> {
        if self.failing {
            return Err(PaybillError::Storage(Box::new(std::io::Error::other(
                "connection refused",
            ))));
        }
        Ok(())
    }
}

/// Filter, stably sort and truncate `docs` the way a document database would.
fn evaluate(query: &Query, docs: Vec<Document>) -> Vec<Document> {
    let mut out: Vec<Document> = docs
        .into_iter()
        .filter(|d| {
            query
                .filter
                .as_ref()
                .is_none_or(|m| d.field_equals(&m.field, &m.value))
        })
        .collect();
    if let Some(sort) = &query.sort {
        out.sort_by(|a, b| {
            let ord = compare_values(a.get(&sort.field), b.get(&sort.field));
            match sort.direction {
                Direction::Ascending => ord,
                Direction::Descending => ord.reverse(),
            }
        });
    }
    if let Some(limit) = query.limit {
        out.truncate(limit);
    }
    out
}

/// Missing and `null` first, then booleans, numbers, strings, and finally
/// arrays and objects.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(value: Option<&Value>) -> u8 {
        match value {
            None | Some(Value::Null) => 0,
            Some(Value::Bool(_)) => 1,
            Some(Value::Number(_)) => 2,
            Some(Value::String(_)) => 3,
            Some(Value::Array(_) | Value::Object(_)) => 4,
        }
    }

    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

impl DocumentStore for InMemoryStore {
    fn find(
        &self,
        collection: Collection,
        query: Query,
    ) -> impl Future<Output = Result<Vec<Document>, PaybillError>> + Send {
        let result = self.check().map(|()| {
            let store = self.store.lock().unwrap();
            evaluate(&query, store.get(&collection).cloned().unwrap_or_default())
        });
        async { result }
    }

    fn find_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
    ) -> impl Future<Output = Result<Option<Document>, PaybillError>> + Send {
        let result = self.check().map(|()| {
            let store = self.store.lock().unwrap();
            store
                .get(&collection)
                .and_then(|docs| docs.iter().find(|d| d.id == id).cloned())
        });
        async { result }
    }

    fn insert(
        &self,
        collection: Collection,
        fields: Fields,
    ) -> impl Future<Output = Result<DocumentId, PaybillError>> + Send {
        let result = self.check().map(|()| {
            let id = DocumentId::generate();
            let mut store = self.store.lock().unwrap();
            store
                .entry(collection)
                .or_default()
                .push(Document::new(id, fields));
            id
        });
        async { result }
    }

    fn update_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
        patch: Fields,
    ) -> impl Future<Output = Result<UpdateOutcome, PaybillError>> + Send {
        let result = self.check().map(|()| {
            let mut store = self.store.lock().unwrap();
            let found = store
                .get_mut(&collection)
                .and_then(|docs| docs.iter_mut().find(|d| d.id == id));
            match found {
                Some(doc) => UpdateOutcome {
                    matched: 1,
                    modified: u64::from(document::merge(&mut doc.fields, patch)),
                },
                None => UpdateOutcome::default(),
            }
        });
        async { result }
    }

    fn delete_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
    ) -> impl Future<Output = Result<u64, PaybillError>> + Send {
        let result = self.check().map(|()| {
            let mut store = self.store.lock().unwrap();
            let Some(docs) = store.get_mut(&collection) else {
                return 0;
            };
            let before = docs.len();
            docs.retain(|d| d.id != id);
            (before - docs.len()) as u64
        });
        async { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        let fields: Fields = serde_json::from_value(value).unwrap();
        Document::new(DocumentId::generate(), fields)
    }

    #[test]
    fn should_keep_natural_order_when_query_is_empty() {
        let docs = vec![doc(json!({"n": 1})), doc(json!({"n": 2}))];
        let ids: Vec<_> = docs.iter().map(|d| d.id).collect();

        let out = evaluate(&Query::all(), docs);
        assert_eq!(out.iter().map(|d| d.id).collect::<Vec<_>>(), ids);
    }

    #[test]
    fn should_sort_descending_and_truncate_to_limit() {
        let docs = vec![
            doc(json!({"date": "2025-01-03"})),
            doc(json!({"date": "2025-03-01"})),
            doc(json!({})),
            doc(json!({"date": "2025-02-10"})),
        ];

        let out = evaluate(&Query::all().sort_desc("date").limit(3), docs);
        let dates: Vec<_> = out.iter().map(|d| d.get("date").cloned()).collect();
        assert_eq!(
            dates,
            vec![
                Some(json!("2025-03-01")),
                Some(json!("2025-02-10")),
                Some(json!("2025-01-03")),
            ]
        );
    }

    #[test]
    fn should_keep_only_exact_matches_when_filtering() {
        let docs = vec![
            doc(json!({"email": "a@x.io"})),
            doc(json!({"email": "A@x.io"})),
            doc(json!({"email": "b@x.io"})),
        ];
        let out = evaluate(&Query::all().filter_eq("email", "a@x.io"), docs);
        assert_eq!(out.len(), 1);
        assert!(out[0].field_equals("email", "a@x.io"));
    }
}
