//! Shared application state for axum handlers.

use std::sync::Arc;

use paybill_app::ports::DocumentStore;
use paybill_app::services::bill_service::BillService;
use paybill_app::services::payment_service::PaymentService;
use paybill_app::services::total_bill_service::TotalBillService;

/// Application state shared across all axum handlers.
///
/// Generic over the document store to avoid dynamic dispatch. `Clone` is
/// implemented manually so the store itself does not need to be `Clone` —
/// only the `Arc` wrappers are cloned.
pub struct AppState<S> {
    /// Reads over `all-bills` and `bills`.
    pub bill_service: Arc<BillService<S>>,
    /// Reads over `total-bills`.
    pub total_bill_service: Arc<TotalBillService<S>>,
    /// Reads and writes over `payments`.
    pub payment_service: Arc<PaymentService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            bill_service: Arc::clone(&self.bill_service),
            total_bill_service: Arc::clone(&self.total_bill_service),
            payment_service: Arc::clone(&self.payment_service),
        }
    }
}

impl<S> AppState<S>
where
    S: DocumentStore + Send + Sync + 'static,
{
    /// Build every service on top of one shared store handle.
    pub fn new(store: S) -> Self
    where
        S: Clone,
    {
        Self::from_services(
            BillService::new(store.clone()),
            TotalBillService::new(store.clone()),
            PaymentService::new(store),
        )
    }

    /// Create a new application state from service instances.
    pub fn from_services(
        bill_service: BillService<S>,
        total_bill_service: TotalBillService<S>,
        payment_service: PaymentService<S>,
    ) -> Self {
        Self {
            bill_service: Arc::new(bill_service),
            total_bill_service: Arc::new(total_bill_service),
            payment_service: Arc::new(payment_service),
        }
    }
}
