//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod bills;
#[allow(clippy::missing_errors_doc)]
pub mod payments;
#[allow(clippy::missing_errors_doc)]
pub mod total_bills;

use std::str::FromStr;

use axum::Json;
use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};

use paybill_app::ports::DocumentStore;
use paybill_domain::document::Document;
use paybill_domain::error::PaybillError;
use paybill_domain::id::DocumentId;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from a list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Document>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from a get-by-id endpoint.
pub enum GetResponse {
    Ok(Json<Document>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Parse a path segment as a document id.
fn parse_id(raw: &str) -> Result<DocumentId, ApiError> {
    DocumentId::from_str(raw).map_err(|err| ApiError::from(PaybillError::from(err)))
}

/// Build the API router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: DocumentStore + Send + Sync + 'static,
{
    Router::new()
        // Bills
        .route("/all-bills", get(bills::recent::<S>))
        .route("/all-bills/{id}", get(bills::get::<S>))
        .route("/bills", get(bills::list::<S>))
        // Totals
        .route("/total-bills", get(total_bills::list::<S>))
        .route("/total-bills/{id}", get(total_bills::get::<S>))
        // Payments
        .route(
            "/payments",
            get(payments::list::<S>).post(payments::create::<S>),
        )
        .route(
            "/payments/{id}",
            put(payments::update::<S>).delete(payments::delete::<S>),
        )
}
