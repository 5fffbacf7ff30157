//! Fallback for unknown routes

use axum::http::Uri;

use crate::error::ApiError;

/// Any unmatched path renders the standard error envelope with 404
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
