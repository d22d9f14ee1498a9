//! Storage port — the document store every service talks to.

use std::future::Future;
use std::sync::Arc;

use paybill_domain::collection::Collection;
use paybill_domain::document::{Document, Fields};
use paybill_domain::error::PaybillError;
use paybill_domain::id::DocumentId;
use paybill_domain::query::Query;

/// Result of a partial update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Documents whose id matched.
    pub matched: u64,
    /// Documents actually changed by the merge.
    pub modified: u64,
}

/// A schema-less document store organised in named collections.
///
/// Each method is exactly one storage call.
pub trait DocumentStore {
    /// Documents matching `query`, sorted and limited as it asks.
    fn find(
        &self,
        collection: Collection,
        query: Query,
    ) -> impl Future<Output = Result<Vec<Document>, PaybillError>> + Send;

    /// Get a document by its identifier.
    fn find_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
    ) -> impl Future<Output = Result<Option<Document>, PaybillError>> + Send;

    /// Insert a new document; storage assigns and returns the identifier.
    fn insert(
        &self,
        collection: Collection,
        fields: Fields,
    ) -> impl Future<Output = Result<DocumentId, PaybillError>> + Send;

    /// Overwrite the top-level fields in `patch` on the document `id`.
    fn update_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
        patch: Fields,
    ) -> impl Future<Output = Result<UpdateOutcome, PaybillError>> + Send;

    /// Delete the document `id`, returning how many documents were removed.
    fn delete_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
    ) -> impl Future<Output = Result<u64, PaybillError>> + Send;
}

impl<T: DocumentStore + Send + Sync> DocumentStore for Arc<T> {
    fn find(
        &self,
        collection: Collection,
        query: Query,
    ) -> impl Future<Output = Result<Vec<Document>, PaybillError>> + Send {
        (**self).find(collection, query)
    }

    fn find_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
    ) -> impl Future<Output = Result<Option<Document>, PaybillError>> + Send {
        (**self).find_by_id(collection, id)
    }

    fn insert(
        &self,
        collection: Collection,
        fields: Fields,
    ) -> impl Future<Output = Result<DocumentId, PaybillError>> + Send {
        (**self).insert(collection, fields)
    }

    fn update_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
        patch: Fields,
    ) -> impl Future<Output = Result<UpdateOutcome, PaybillError>> + Send {
        (**self).update_by_id(collection, id, patch)
    }

    fn delete_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
    ) -> impl Future<Output = Result<u64, PaybillError>> + Send {
        (**self).delete_by_id(collection, id)
    }
}
