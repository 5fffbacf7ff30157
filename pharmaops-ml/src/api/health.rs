//! Health check endpoint

use axum::{routing::get, Json, Router};
use pharmaops_common::api::HealthResponse;

use crate::AppState;

/// GET /health
///
/// Liveness probe; takes no input and cannot fail.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
