//! Payment service — the only collection with a write path.

use paybill_domain::collection::Collection;
use paybill_domain::document::{self, Document, Fields};
use paybill_domain::error::{BadRequestError, NotFoundError, PaybillError};
use paybill_domain::id::DocumentId;
use paybill_domain::query::Query;

use crate::ports::DocumentStore;

/// Application service for user payments.
pub struct PaymentService<S> {
    store: S,
}

impl<S: DocumentStore> PaymentService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Insert `fields` verbatim as a new payment.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    #[tracing::instrument(skip(self, fields))]
    pub async fn create_payment(&self, fields: Fields) -> Result<DocumentId, PaybillError> {
        let id = self
            .store
            .insert(Collection::Payments, document::without_id(fields))
            .await?;
        tracing::debug!(%id, "payment created");
        Ok(id)
    }

    /// Payments whose `email` equals `email` exactly, newest `date` first.
    ///
    /// # Errors
    ///
    /// Returns [`PaybillError::BadRequest`] when `email` is missing or empty,
    /// or a storage error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn list_payments(&self, email: Option<&str>) -> Result<Vec<Document>, PaybillError> {
        let email = email
            .filter(|e| !e.is_empty())
            .ok_or(BadRequestError::MissingEmail)?;
        let query = Query::all().filter_eq("email", email).sort_desc("date");
        self.store.find(Collection::Payments, query).await
    }

    /// Merge `patch` into the payment `id`.
    ///
    /// # Errors
    ///
    /// Returns [`PaybillError::NotFound`] when nothing was modified, which
    /// covers both an unknown id and a patch that changes nothing, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_payment(&self, id: DocumentId, patch: Fields) -> Result<(), PaybillError> {
        let outcome = self
            .store
            .update_by_id(Collection::Payments, id, document::without_id(patch))
            .await?;
        if outcome.modified == 0 {
            tracing::debug!(%id, matched = outcome.matched, "payment update modified nothing");
            return Err(NotFoundError::PaymentToUpdate { id: id.to_string() }.into());
        }
        Ok(())
    }

    /// Delete the payment `id`.
    ///
    /// # Errors
    ///
    /// Returns [`PaybillError::NotFound`] when nothing was deleted, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn delete_payment(&self, id: DocumentId) -> Result<(), PaybillError> {
        let deleted = self.store.delete_by_id(Collection::Payments, id).await?;
        if deleted == 0 {
            return Err(NotFoundError::PaymentToDelete { id: id.to_string() }.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryStore;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn make_service() -> (Arc<InMemoryStore>, PaymentService<Arc<InMemoryStore>>) {
        let store = Arc::new(InMemoryStore::default());
        (Arc::clone(&store), PaymentService::new(store))
    }

    fn fields(value: Value) -> Fields {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn should_store_body_verbatim_when_creating() {
        let (_, svc) = make_service();
        let body = json!({"email": "ana@example.com", "amount": 42.5, "date": "2025-04-01"});

        let id = svc.create_payment(fields(body.clone())).await.unwrap();

        let listed = svc.list_payments(Some("ana@example.com")).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);
        assert_eq!(Value::Object(listed[0].fields.clone()), body);
    }

    #[tokio::test]
    async fn should_ignore_client_supplied_id_when_creating() {
        let (_, svc) = make_service();
        let id = svc
            .create_payment(fields(json!({"_id": "abc", "email": "x@y.z"})))
            .await
            .unwrap();

        let listed = svc.list_payments(Some("x@y.z")).await.unwrap();
        assert_eq!(listed[0].id, id);
        assert!(!listed[0].fields.contains_key("_id"));
    }

    #[tokio::test]
    async fn should_reject_listing_without_email() {
        let (_, svc) = make_service();
        for email in [None, Some("")] {
            let result = svc.list_payments(email).await;
            assert!(matches!(
                result,
                Err(PaybillError::BadRequest(BadRequestError::MissingEmail))
            ));
        }
    }

    #[tokio::test]
    async fn should_list_only_matching_email_newest_first() {
        let (store, svc) = make_service();
        store.seed(Collection::Payments, json!({"email": "a@x.io", "date": "2025-01-01"}));
        store.seed(Collection::Payments, json!({"email": "b@x.io", "date": "2025-06-01"}));
        store.seed(Collection::Payments, json!({"email": "a@x.io", "date": "2025-03-01"}));

        let listed = svc.list_payments(Some("a@x.io")).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|d| d.field_equals("email", "a@x.io")));
        assert_eq!(listed[0].get("date"), Some(&json!("2025-03-01")));
    }

    #[tokio::test]
    async fn should_merge_patch_and_keep_other_fields() {
        let (store, svc) = make_service();
        let id = store.seed(
            Collection::Payments,
            json!({"email": "a@x.io", "status": "pending", "amount": 30}),
        );

        svc.update_payment(id, fields(json!({"status": "paid"})))
            .await
            .unwrap();

        let listed = svc.list_payments(Some("a@x.io")).await.unwrap();
        assert_eq!(
            Value::Object(listed[0].fields.clone()),
            json!({"email": "a@x.io", "status": "paid", "amount": 30})
        );
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_payment() {
        let (_, svc) = make_service();
        let result = svc
            .update_payment(DocumentId::generate(), fields(json!({"status": "paid"})))
            .await;
        assert!(matches!(
            result,
            Err(PaybillError::NotFound(NotFoundError::PaymentToUpdate { .. }))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_update_changes_nothing() {
        let (store, svc) = make_service();
        let id = store.seed(Collection::Payments, json!({"status": "paid"}));
        let result = svc.update_payment(id, fields(json!({"status": "paid"}))).await;
        assert!(matches!(result, Err(PaybillError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_once_then_return_not_found() {
        let (store, svc) = make_service();
        let id = store.seed(Collection::Payments, json!({"email": "a@x.io"}));

        svc.delete_payment(id).await.unwrap();
        let second = svc.delete_payment(id).await;
        assert!(matches!(
            second,
            Err(PaybillError::NotFound(NotFoundError::PaymentToDelete { .. }))
        ));
    }

    #[tokio::test]
    async fn should_propagate_storage_failure_when_creating() {
        let svc = PaymentService::new(InMemoryStore::failing());
        let result = svc.create_payment(Fields::new()).await;
        assert!(matches!(result, Err(PaybillError::Storage(_))));
    }
}
