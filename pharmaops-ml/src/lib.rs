//! pharmaops-ml library - ML service for PharmaOps
//!
//! Serves document classification, field extraction and shipment risk
//! scoring over HTTP. All scoring is rule-based (see [`heuristics`]); the
//! handlers only validate payloads and serialize results.

use axum::Router;
use pharmaops_common::api::BuildInfo;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod heuristics;

pub use crate::error::{ApiError, ApiResult};

/// Name reported in build identification and startup logs
pub const MODULE_NAME: &str = "pharmaops-ml";

/// Application state shared across HTTP handlers
///
/// Immutable after startup; requests never share mutable data.
#[derive(Clone)]
pub struct AppState {
    /// Build identification for `/build_info`
    pub build_info: BuildInfo,
}

impl AppState {
    /// Create application state for the running binary
    pub fn new() -> Self {
        Self {
            build_info: BuildInfo {
                module: MODULE_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                git_hash: env!("GIT_HASH").to_string(),
                build_timestamp: env!("BUILD_TIMESTAMP").to_string(),
                build_profile: env!("BUILD_PROFILE").to_string(),
            },
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .merge(api::health_routes())
        .merge(api::inference_routes())
        .route("/build_info", get(api::get_build_info))
        .fallback(api::not_found)
        .with_state(state)
        // One span per request, logged at the configured level
        .layer(TraceLayer::new_for_http())
        // Backend and frontend call from other origins
        .layer(CorsLayer::permissive())
}
