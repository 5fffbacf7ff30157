//! Validating JSON body extractor
//!
//! Replaces `axum::Json` for request payloads. The body is buffered and
//! checked against the payload's field schema, so a bad request yields a
//! 422 that names every offending field rather than axum's plain-text
//! rejection. Content-Type is not enforced; the body is always parsed as JSON.
//!
//! Buffering honours the router's `DefaultBodyLimit` (see
//! [`crate::api::inference::MAX_PAYLOAD_BYTES`]); a body that cannot be
//! buffered keeps the status axum assigned to it.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use pharmaops_common::api::{validate_body, PayloadSchema};

use crate::error::ApiError;

/// Extractor yielding a validated, deserialized payload
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: PayloadSchema,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::BodyRejected(rejection.status(), rejection.body_text())
            })?;

        validate_body::<T>(&body)
            .map(ValidatedJson)
            .map_err(ApiError::Validation)
    }
}
