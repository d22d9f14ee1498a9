//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use paybill_app::ports::DocumentStore;

use crate::state::AppState;

/// Plain-text banner served at `/`.
pub const ROOT_MESSAGE: &str = "Utility Bill Management API is running...";

/// Build the top-level axum [`Router`].
///
/// Merges the API routes at the root, allows cross-origin requests from
/// any origin, and includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: DocumentStore + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> &'static str {
    ROOT_MESSAGE
}

async fn health_check() -> &'static str {
    "OK"
}
