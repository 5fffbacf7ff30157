//! HTTP API handlers for pharmaops-ml

pub mod buildinfo;
pub mod health;
pub mod inference;
pub mod json;
pub mod not_found;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use inference::{
    classify_document, extract_fields, inference_routes, predict_risk, MAX_PAYLOAD_BYTES,
};
pub use json::ValidatedJson;
pub use not_found::not_found;
