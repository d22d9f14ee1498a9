//! Total bill service — read-only use-cases over `total-bills`.

use paybill_domain::collection::Collection;
use paybill_domain::document::Document;
use paybill_domain::error::{NotFoundError, PaybillError};
use paybill_domain::id::DocumentId;
use paybill_domain::query::Query;

use crate::ports::DocumentStore;

/// Application service for aggregated bill totals.
pub struct TotalBillService<S> {
    store: S,
}

impl<S: DocumentStore> TotalBillService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All totals, or only those whose `category` equals `category` exactly.
    ///
    /// An empty category is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    #[tracing::instrument(skip(self))]
    pub async fn list_total_bills(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<Document>, PaybillError> {
        let query = match category.filter(|c| !c.is_empty()) {
            Some(category) => Query::all().filter_eq("category", category),
            None => Query::all(),
        };
        self.store.find(Collection::TotalBills, query).await
    }

    /// Look up a total by id.
    ///
    /// # Errors
    ///
    /// Returns [`PaybillError::NotFound`] when nothing has `id`, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn get_total_bill(&self, id: DocumentId) -> Result<Document, PaybillError> {
        self.store
            .find_by_id(Collection::TotalBills, id)
            .await?
            .ok_or_else(|| NotFoundError::Bill { id: id.to_string() }.into())
    }
}
