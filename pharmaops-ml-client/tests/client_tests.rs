//! Integration tests for MlClient against a live service
//!
//! Each test binds the real `pharmaops-ml` router (or a stub) to an
//! ephemeral port and talks to it over HTTP.

use axum::{http::StatusCode, routing::post, Json, Router};
use pharmaops_common::api::{
    DocumentCategory, ErrorBody, ErrorResponse, ExtractFieldsResponse, FieldError,
    ShipmentPayload,
};
use pharmaops_ml::{build_router, AppState};
use pharmaops_ml_client::{MlClient, MlClientError};

/// Test helper: Serve `app` on 127.0.0.1:<ephemeral>, return base URL
async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Should bind ephemeral port");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn service_client() -> MlClient {
    let base_url = spawn(build_router(AppState::new())).await;
    MlClient::new(&base_url).unwrap()
}

fn shipment(status: &str) -> ShipmentPayload {
    ShipmentPayload {
        product: "Insulin glargine".to_string(),
        origin: "Frankfurt".to_string(),
        destination: "Nairobi".to_string(),
        status: status.to_string(),
    }
}

#[tokio::test]
async fn test_health() {
    let client = service_client().await;

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn test_classify_document() {
    let client = service_client().await;

    let result = client
        .classify_document("Marketing authorisation submission", None)
        .await
        .unwrap();
    assert_eq!(result.category, DocumentCategory::Submission);
    assert_eq!(result.confidence, 0.78);

    let result = client
        .classify_document("Temperature excursion handling", Some("en"))
        .await
        .unwrap();
    assert_eq!(result.category, DocumentCategory::Sop);
}

#[tokio::test]
async fn test_extract_fields() {
    let client = service_client().await;

    let result = client
        .extract_fields("Product: Metformin, Country: BR", Some("pt"))
        .await
        .unwrap();
    assert_eq!(result, ExtractFieldsResponse::default());
}

#[tokio::test]
async fn test_predict_shipment_risk() {
    let client = service_client().await;

    let delayed = client.predict_shipment_risk(&shipment("Delayed")).await.unwrap();
    assert_eq!(delayed.risk_score, 0.7);
    assert_eq!(
        delayed.explanation.as_deref(),
        Some("Heuristic risk score based on status")
    );

    let exception = client
        .predict_shipment_risk(&shipment("exception"))
        .await
        .unwrap();
    assert_eq!(exception.risk_score, 0.9);

    let normal = client
        .predict_shipment_risk(&shipment("in_transit"))
        .await
        .unwrap();
    assert_eq!(normal.risk_score, 0.2);
}

#[tokio::test]
async fn test_validation_error_is_decoded() {
    async fn reject() -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: ErrorBody {
                    code: "VALIDATION_ERROR".to_string(),
                    message: "Request validation failed: content: field required".to_string(),
                    fields: vec![FieldError::new("content", "field required")],
                },
            }),
        )
    }

    let base_url = spawn(Router::new().route("/classify", post(reject))).await;
    let client = MlClient::new(&base_url).unwrap();

    match client.classify_document("x", None).await {
        Err(MlClientError::Validation { status, fields }) => {
            assert_eq!(status, 422);
            assert_eq!(fields, vec![FieldError::new("content", "field required")]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unstructured_422_is_api_error() {
    async fn reject() -> (StatusCode, &'static str) {
        (StatusCode::UNPROCESSABLE_ENTITY, "nope")
    }

    let base_url = spawn(Router::new().route("/predict-risk", post(reject))).await;
    let client = MlClient::new(&base_url).unwrap();

    let err = client
        .predict_shipment_risk(&shipment("delayed"))
        .await
        .unwrap_err();
    assert!(matches!(err, MlClientError::Api(422, ref body) if body == "nope"));
}

#[tokio::test]
async fn test_unknown_endpoint_is_api_error() {
    // Stub without the inference routes
    let base_url = spawn(Router::new()).await;
    let client = MlClient::new(&base_url).unwrap();

    let err = client.extract_fields("x", None).await.unwrap_err();
    assert!(matches!(err, MlClientError::Api(404, _)));
}

#[tokio::test]
async fn test_unparseable_success_body_is_parse_error() {
    async fn garbage() -> &'static str {
        "not json"
    }

    let base_url = spawn(Router::new().route("/classify", post(garbage))).await;
    let client = MlClient::new(&base_url).unwrap();

    let err = client.classify_document("x", None).await.unwrap_err();
    assert!(matches!(err, MlClientError::Parse(_)));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = MlClient::new(&format!("http://{}", addr)).unwrap();
    let err = client.health().await.unwrap_err();
    assert!(matches!(err, MlClientError::Network(_)));
}
