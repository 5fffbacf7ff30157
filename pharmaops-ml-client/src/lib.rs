//! PharmaOps ML service client
//!
//! Typed async client used by the PharmaOps backend to reach `pharmaops-ml`.
//! Request and response shapes come from `pharmaops_common::api`, so client
//! and service cannot drift apart.
//!
//! Base URL resolution: explicit argument, else `ML_SERVICE_URL`, else
//! `http://localhost:8000`. Every request times out after 5 seconds.

use std::time::Duration;

use pharmaops_common::api::{
    ClassificationResponse, DocumentPayload, ErrorResponse, ExtractFieldsResponse, FieldError,
    HealthResponse, ShipmentPayload, ShipmentRiskResponse,
};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub const ML_SERVICE_URL_ENV: &str = "ML_SERVICE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const USER_AGENT: &str = concat!("pharmaops-ml-client/", env!("CARGO_PKG_VERSION"));

/// ML client errors
#[derive(Debug, Error)]
pub enum MlClientError {
    /// Base URL could not be parsed or client could not be built
    #[error("Client configuration error: {0}")]
    Config(String),

    /// Network communication error (includes timeouts)
    #[error("Network error: {0}")]
    Network(String),

    /// Service rejected the payload (422) with field-level errors
    #[error("Validation failed ({status}): {}", describe_fields(.fields))]
    Validation { status: u16, fields: Vec<FieldError> },

    /// Service returned any other non-success response
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// Failed to parse response JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

fn describe_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, MlClientError>;

/// Client for the PharmaOps ML service
#[derive(Debug, Clone)]
pub struct MlClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl MlClient {
    /// Create client for the service at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = Url::parse(trimmed)
            .map_err(|e| MlClientError::Config(format!("invalid base URL '{}': {}", base_url, e)))?;

        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MlClientError::Config(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Create client from `ML_SERVICE_URL`, falling back to localhost:8000
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(ML_SERVICE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// GET /health
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = self.endpoint("/health");
        tracing::debug!(url = %url, "Checking ML service health");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| MlClientError::Network(e.to_string()))?;

        decode(response).await
    }

    /// POST /classify
    ///
    /// `language` defaults to "en".
    pub async fn classify_document(
        &self,
        content: &str,
        language: Option<&str>,
    ) -> Result<ClassificationResponse> {
        let payload = DocumentPayload::new(content, language);
        let result: ClassificationResponse = self.post("/classify", &payload).await?;

        tracing::debug!(
            category = %result.category,
            confidence = result.confidence,
            "Document classified"
        );
        Ok(result)
    }

    /// POST /extract-fields
    pub async fn extract_fields(
        &self,
        content: &str,
        language: Option<&str>,
    ) -> Result<ExtractFieldsResponse> {
        let payload = DocumentPayload::new(content, language);
        self.post("/extract-fields", &payload).await
    }

    /// POST /predict-risk
    pub async fn predict_shipment_risk(
        &self,
        shipment: &ShipmentPayload,
    ) -> Result<ShipmentRiskResponse> {
        let result: ShipmentRiskResponse = self.post("/predict-risk", shipment).await?;

        tracing::debug!(
            product = %shipment.product,
            status = %shipment.status,
            risk_score = result.risk_score,
            "Shipment risk predicted"
        );
        Ok(result)
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path);
        tracing::debug!(url = %url, "Calling ML service");

        let response = self
            .http_client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| MlClientError::Network(e.to_string()))?;

        decode(response).await
    }
}

async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
    let status = response.status();

    if status == StatusCode::UNPROCESSABLE_ENTITY {
        let text = response.text().await.unwrap_or_default();
        return Err(match serde_json::from_str::<ErrorResponse>(&text) {
            Ok(parsed) => MlClientError::Validation {
                status: status.as_u16(),
                fields: parsed.error.fields,
            },
            Err(_) => MlClientError::Api(status.as_u16(), text),
        });
    }

    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(MlClientError::Api(status.as_u16(), error_text));
    }

    response
        .json()
        .await
        .map_err(|e| MlClientError::Parse(e.to_string()))
}
