//! JSON REST handlers for `payments`.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use paybill_app::ports::DocumentStore;
use paybill_domain::document::Fields;

use super::{ListResponse, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct PaymentsParams {
    pub email: Option<String>,
}

#[derive(Serialize)]
struct MessageBody {
    message: &'static str,
}

/// Possible responses from the write endpoints.
pub enum WriteResponse {
    Created,
    Updated,
    Deleted,
}

impl IntoResponse for WriteResponse {
    fn into_response(self) -> Response {
        let message = match self {
            Self::Created => "Payment successful",
            Self::Updated => "Payment updated successfully",
            Self::Deleted => "Payment deleted successfully",
        };
        Json(MessageBody { message }).into_response()
    }
}

/// `POST /payments` — insert the body as a new payment.
pub async fn create<S>(
    State(state): State<AppState<S>>,
    payload: Result<Json<Fields>, JsonRejection>,
) -> Result<WriteResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let Json(fields) = payload?;
    state.payment_service.create_payment(fields).await?;
    Ok(WriteResponse::Created)
}

/// `GET /payments?email=...`
pub async fn list<S>(
    State(state): State<AppState<S>>,
    params: Result<Query<PaymentsParams>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let Query(params) = params?;
    let payments = state
        .payment_service
        .list_payments(params.email.as_deref())
        .await?;
    Ok(ListResponse::Ok(Json(payments)))
}

/// `PUT /payments/:id` — merge the body into the stored payment.
pub async fn update<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    payload: Result<Json<Fields>, JsonRejection>,
) -> Result<WriteResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let Json(patch) = payload?;
    state.payment_service.update_payment(id, patch).await?;
    Ok(WriteResponse::Updated)
}

/// `DELETE /payments/:id`
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<WriteResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    state.payment_service.delete_payment(id).await?;
    Ok(WriteResponse::Deleted)
}
