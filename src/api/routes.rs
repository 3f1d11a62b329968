//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{data, health, AppState};

/// Create the API router.
///
/// Paths other than `/health` and `/data` fall through to axum's default 404.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness probe
        .route("/health", get(health))
        // Host identity report
        .route("/data", get(data))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
