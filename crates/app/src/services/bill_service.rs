//! Bill service — read-only use-cases over `all-bills` and `bills`.

use paybill_domain::collection::Collection;
use paybill_domain::document::Document;
use paybill_domain::error::{NotFoundError, PaybillError};
use paybill_domain::id::DocumentId;
use paybill_domain::query::Query;

use crate::ports::DocumentStore;

/// How many bills the recent listing returns.
pub const RECENT_BILLS_LIMIT: usize = 6;

/// Application service for bill lookups.
pub struct BillService<S> {
    store: S,
}

impl<S: DocumentStore> BillService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The most recent bills from `all-bills`, newest `date` first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    #[tracing::instrument(skip(self))]
    pub async fn recent_bills(&self) -> Result<Vec<Document>, PaybillError> {
        let query = Query::all().sort_desc("date").limit(RECENT_BILLS_LIMIT);
        self.store.find(Collection::AllBills, query).await
    }

    /// Look up a bill in `all-bills`.
    ///
    /// # Errors
    ///
    /// Returns [`PaybillError::NotFound`] when no bill has `id`, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn get_bill(&self, id: DocumentId) -> Result<Document, PaybillError> {
        self.store
            .find_by_id(Collection::AllBills, id)
            .await?
            .ok_or_else(|| NotFoundError::Bill { id: id.to_string() }.into())
    }

    /// Every document in `bills`, unfiltered and unbounded.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    #[tracing::instrument(skip(self))]
    pub async fn list_bills(&self) -> Result<Vec<Document>, PaybillError> {
        self.store.find(Collection::Bills, Query::all()).await
    }
}
