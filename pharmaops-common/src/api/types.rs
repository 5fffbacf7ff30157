//! Shared API request/response types
//!
//! Wire shapes for the ML service endpoints. Field names are part of the
//! public contract with the PharmaOps backend (note `riskScore` is camelCase
//! while `expiry_date` is snake_case).

use serde::{Deserialize, Serialize};

use super::validation::{FieldError, FieldKind, FieldSpec, PayloadSchema};

/// Default document language when the caller omits it
pub const DEFAULT_LANGUAGE: &str = "en";

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

// ========================================
// Request Payloads
// ========================================

/// Document body for `/classify` and `/extract-fields`
///
/// # Examples
///
/// ```
/// use pharmaops_common::api::types::DocumentPayload;
///
/// let payload: DocumentPayload =
///     serde_json::from_str(r#"{"content": "Batch release SOP"}"#).unwrap();
/// assert_eq!(payload.language, "en");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DocumentPayload {
    /// Raw document text
    pub content: String,

    /// ISO language code, defaults to "en"
    #[serde(default = "default_language")]
    pub language: String,
}

impl DocumentPayload {
    pub fn new(content: impl Into<String>, language: Option<&str>) -> Self {
        Self {
            content: content.into(),
            language: language.unwrap_or(DEFAULT_LANGUAGE).to_string(),
        }
    }
}

impl PayloadSchema for DocumentPayload {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("content", FieldKind::Required),
        FieldSpec::new("language", FieldKind::Optional),
    ];
}

/// Shipment snapshot for `/predict-risk`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShipmentPayload {
    pub product: String,
    pub origin: String,
    pub destination: String,
    /// Carrier status, compared case-insensitively
    pub status: String,
}

impl PayloadSchema for ShipmentPayload {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("product", FieldKind::Required),
        FieldSpec::new("origin", FieldKind::Required),
        FieldSpec::new("destination", FieldKind::Required),
        FieldSpec::new("status", FieldKind::Required),
    ];
}

// ========================================
// Responses
// ========================================

/// Document category produced by `/classify`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentCategory {
    /// Regulatory submission
    Submission,
    /// Standard operating procedure
    Sop,
}

impl DocumentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentCategory::Submission => "submission",
            DocumentCategory::Sop => "sop",
        }
    }
}

impl std::fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClassificationResponse {
    pub category: DocumentCategory,
    /// Confidence in [0, 1]
    pub confidence: f64,
}

/// Fields extracted from a document
///
/// All fields serialize as explicit `null` when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractFieldsResponse {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ShipmentRiskResponse {
    /// Risk score in [0, 1]
    #[serde(rename = "riskScore")]
    pub risk_score: f64,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Build identification of a running service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BuildInfo {
    pub module: String,
    pub version: String,
    pub git_hash: String,
    pub build_timestamp: String,
    pub build_profile: String,
}

// ========================================
// Error Response Types
// ========================================

/// Error envelope returned for every non-2xx response
///
/// # Examples
///
/// ```
/// use pharmaops_common::api::types::ErrorResponse;
///
/// let body = r#"{"error":{"code":"VALIDATION_ERROR","message":"bad",
///     "fields":[{"field":"content","message":"field required"}]}}"#;
/// let parsed: ErrorResponse = serde_json::from_str(body).unwrap();
/// assert_eq!(parsed.error.fields[0].field, "content");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorBody {
    /// Machine-readable code (e.g. "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable summary
    pub message: String,
    /// Offending fields, present for validation failures only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}
