//! Error types for pharmaops-ml
//!
//! Every error renders as the shared `{"error": {"code", "message"}}`
//! envelope; validation failures add the offending `fields`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pharmaops_common::api::{ErrorBody, ErrorResponse, FieldError};
use thiserror::Error;
use tracing::debug;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload failed field validation (422)
    #[error("Request validation failed: {}", join_fields(.0))]
    Validation(Vec<FieldError>),

    /// Request body could not be buffered; keeps the transport's status
    /// (413 when over the size limit)
    #[error("Request body rejected: {1}")]
    BodyRejected(StatusCode, String),

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BodyRejected(status, _) => *status,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::BodyRejected(status, _) if *status == StatusCode::PAYLOAD_TOO_LARGE => {
                "PAYLOAD_TOO_LARGE"
            }
            ApiError::BodyRejected(..) => "BAD_REQUEST",
            ApiError::NotFound(_) => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(status = status.as_u16(), "{}", self);

        let message = self.to_string();
        let code = self.code().to_string();
        let fields = match self {
            ApiError::Validation(fields) => fields,
            _ => Vec::new(),
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code,
                message,
                fields,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_fields() {
        let err = ApiError::Validation(vec![
            FieldError::new("product", "field required"),
            FieldError::new("status", "input should be a valid string"),
        ]);
        assert_eq!(
            err.to_string(),
            "Request validation failed: product: field required; status: input should be a valid string"
        );
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::NotFound("/nope".to_string()).status(),
            StatusCode::NOT_FOUND
        );

        let too_large =
            ApiError::BodyRejected(StatusCode::PAYLOAD_TOO_LARGE, "length limit".to_string());
        assert_eq!(too_large.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(too_large.code(), "PAYLOAD_TOO_LARGE");

        let unreadable = ApiError::BodyRejected(StatusCode::BAD_REQUEST, "reset".to_string());
        assert_eq!(unreadable.status(), StatusCode::BAD_REQUEST);
        assert_eq!(unreadable.code(), "BAD_REQUEST");
    }
}
