//! JSON REST handlers for `total-bills`.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use paybill_app::ports::DocumentStore;

use super::{GetResponse, ListResponse, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct TotalBillsParams {
    pub category: Option<String>,
}

/// `GET /total-bills?category=...`
pub async fn list<S>(
    State(state): State<AppState<S>>,
    params: Result<Query<TotalBillsParams>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let Query(params) = params?;
    let totals = state
        .total_bill_service
        .list_total_bills(params.category.as_deref())
        .await?;
    Ok(ListResponse::Ok(Json(totals)))
}

/// `GET /total-bills/:id`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let total = state.total_bill_service.get_total_bill(id).await?;
    Ok(GetResponse::Ok(Json(total)))
}
