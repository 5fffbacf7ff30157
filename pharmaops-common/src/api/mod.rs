//! API module for shared HTTP API functionality
//!
//! # Design Principle
//!
//! This module contains ONLY:
//! - Pure functions (no HTTP framework dependencies)
//! - Shared request/response types
//!
//! The service wraps these with axum extractors; the client uses the same
//! types to build requests and decode responses.

pub mod types;
pub mod validation;

pub use types::{
    BuildInfo, ClassificationResponse, DocumentCategory, DocumentPayload, ErrorBody,
    ErrorResponse, ExtractFieldsResponse, HealthResponse, ShipmentPayload,
    ShipmentRiskResponse,
};
pub use validation::{validate_body, FieldError, FieldKind, FieldSpec, PayloadSchema};
