//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use paybill_domain::error::PaybillError;

/// JSON body for failures: `{"error": ...}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// JSON body for not-found outcomes: `{"message": ...}`.
#[derive(Serialize)]
struct MessageBody {
    message: String,
}

/// Maps [`PaybillError`] and extractor rejections to HTTP responses.
pub enum ApiError {
    Domain(PaybillError),
    Body(JsonRejection),
    Query(QueryRejection),
}

impl From<PaybillError> for ApiError {
    fn from(err: PaybillError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Query(rejection)
    }
}

fn error(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Domain(PaybillError::NotFound(err)) => (
                StatusCode::NOT_FOUND,
                Json(MessageBody {
                    message: err.to_string(),
                }),
            )
                .into_response(),
            Self::Domain(PaybillError::BadRequest(err)) => {
                error(StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(PaybillError::InvalidId(err)) => {
                tracing::warn!(error = %err, "malformed document id");
                error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            Self::Domain(PaybillError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            Self::Body(rejection) => error(rejection.status(), rejection.body_text()),
            Self::Query(rejection) => error(rejection.status(), rejection.body_text()),
        }
    }
}
