//! Inference endpoints
//!
//! - POST /classify        → document category
//! - POST /extract-fields  → extracted document fields
//! - POST /predict-risk    → shipment risk score
//!
//! Handlers are thin: validate via [`ValidatedJson`], delegate to
//! [`crate::heuristics`], serialize.

use axum::{extract::DefaultBodyLimit, routing::post, Json, Router};
use pharmaops_common::api::{
    ClassificationResponse, DocumentPayload, ExtractFieldsResponse, ShipmentPayload,
    ShipmentRiskResponse,
};
use tracing::debug;

use super::json::ValidatedJson;
use crate::{heuristics, AppState};

/// Largest accepted request body; documents are sent inline as text
pub const MAX_PAYLOAD_BYTES: usize = 32 * 1024 * 1024;

/// POST /classify
pub async fn classify_document(
    ValidatedJson(payload): ValidatedJson<DocumentPayload>,
) -> Json<ClassificationResponse> {
    let response = heuristics::classify(&payload.content);
    debug!(
        category = %response.category,
        language = %payload.language,
        content_len = payload.content.len(),
        "Classified document"
    );
    Json(response)
}

/// POST /extract-fields
pub async fn extract_fields(
    ValidatedJson(payload): ValidatedJson<DocumentPayload>,
) -> Json<ExtractFieldsResponse> {
    debug!(
        language = %payload.language,
        content_len = payload.content.len(),
        "Extracting document fields"
    );
    Json(heuristics::extract_fields(&payload))
}

/// POST /predict-risk
pub async fn predict_risk(
    ValidatedJson(payload): ValidatedJson<ShipmentPayload>,
) -> Json<ShipmentRiskResponse> {
    let response = heuristics::predict_risk(&payload);
    debug!(
        product = %payload.product,
        origin = %payload.origin,
        destination = %payload.destination,
        status = %payload.status,
        risk_score = response.risk_score,
        "Predicted shipment risk"
    );
    Json(response)
}

/// Build inference routes
pub fn inference_routes() -> Router<AppState> {
    Router::new()
        .route("/classify", post(classify_document))
        .route("/extract-fields", post(extract_fields))
        .route("/predict-risk", post(predict_risk))
        // axum's 2 MiB default is too small for full documents
        .layer(DefaultBodyLimit::max(MAX_PAYLOAD_BYTES))
}
