//! Build information API endpoint
//!
//! Provides version and build metadata of the running binary

use axum::{extract::State, response::Json};
use pharmaops_common::api::BuildInfo;

use crate::AppState;

/// GET /build_info
pub async fn get_build_info(State(state): State<AppState>) -> Json<BuildInfo> {
    Json(state.build_info)
}
