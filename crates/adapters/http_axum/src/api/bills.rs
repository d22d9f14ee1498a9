//! JSON REST handlers for `all-bills` and `bills`.

use axum::Json;
use axum::extract::{Path, State};

use paybill_app::ports::DocumentStore;

use super::{GetResponse, ListResponse, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /all-bills` — the six most recent bills.
pub async fn recent<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let bills = state.bill_service.recent_bills().await?;
    Ok(ListResponse::Ok(Json(bills)))
}

/// `GET /all-bills/:id`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let bill = state.bill_service.get_bill(id).await?;
    Ok(GetResponse::Ok(Json(bill)))
}

/// `GET /bills` — every bill, unbounded.
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let bills = state.bill_service.list_bills().await?;
    Ok(ListResponse::Ok(Json(bills)))
}
