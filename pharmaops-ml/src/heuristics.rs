//! Rule-based scoring
//!
//! Stand-ins for trained models. Outputs are pure functions of the input,
//! so identical requests always produce identical responses.

use pharmaops_common::api::{
    ClassificationResponse, DocumentCategory, DocumentPayload, ExtractFieldsResponse,
    ShipmentPayload, ShipmentRiskResponse,
};

/// Keyword marking a document as a regulatory submission (matched lower-case)
pub const SUBMISSION_KEYWORD: &str = "submission";

/// Confidence reported for every classification
pub const CLASSIFICATION_CONFIDENCE: f64 = 0.78;

pub const BASE_RISK: f64 = 0.2;
pub const DELAYED_RISK: f64 = 0.7;
pub const EXCEPTION_RISK: f64 = 0.9;

pub const RISK_EXPLANATION: &str = "Heuristic risk score based on status";

/// Classify a document as submission or SOP by keyword
pub fn classify(content: &str) -> ClassificationResponse {
    let category = if content.to_lowercase().contains(SUBMISSION_KEYWORD) {
        DocumentCategory::Submission
    } else {
        DocumentCategory::Sop
    };

    ClassificationResponse {
        category,
        confidence: CLASSIFICATION_CONFIDENCE,
    }
}

/// Extract country, product and expiry date from a document
///
/// No extractor is wired in yet, so every field is always `None`.
pub fn extract_fields(_document: &DocumentPayload) -> ExtractFieldsResponse {
    ExtractFieldsResponse {
        country: None,
        product: None,
        expiry_date: None,
    }
}

/// Score shipment risk from its carrier status alone
pub fn predict_risk(shipment: &ShipmentPayload) -> ShipmentRiskResponse {
    let risk_score = match shipment.status.to_lowercase().as_str() {
        "delayed" => DELAYED_RISK,
        "exception" => EXCEPTION_RISK,
        _ => BASE_RISK,
    };

    ShipmentRiskResponse {
        risk_score,
        explanation: Some(RISK_EXPLANATION.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipment(status: &str) -> ShipmentPayload {
        ShipmentPayload {
            product: "Amoxicillin 500mg".to_string(),
            origin: "Hyderabad".to_string(),
            destination: "Rotterdam".to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_classify_submission_any_case() {
        for content in [
            "submission",
            "Annual SUBMISSION to EMA",
            "Resubmission of dossier",
        ] {
            let result = classify(content);
            assert_eq!(result.category, DocumentCategory::Submission, "{content}");
            assert_eq!(result.confidence, CLASSIFICATION_CONFIDENCE);
        }
    }

    #[test]
    fn test_classify_defaults_to_sop() {
        for content in ["", "Cleaning procedure for line 3", "submit the form"] {
            let result = classify(content);
            assert_eq!(result.category, DocumentCategory::Sop, "{content}");
            assert_eq!(result.confidence, 0.78);
        }
    }

    #[test]
    fn test_extract_fields_is_empty() {
        let result = extract_fields(&DocumentPayload::new(
            "Country: India; Product: Paracetamol; Expiry: 2027-01-01",
            None,
        ));
        assert_eq!(result, ExtractFieldsResponse::default());
    }

    #[test]
    fn test_risk_by_status() {
        assert_eq!(predict_risk(&shipment("delayed")).risk_score, DELAYED_RISK);
        assert_eq!(predict_risk(&shipment("Delayed")).risk_score, 0.7);
        assert_eq!(predict_risk(&shipment("EXCEPTION")).risk_score, 0.9);
        assert_eq!(predict_risk(&shipment("in_transit")).risk_score, 0.2);
        assert_eq!(predict_risk(&shipment("")).risk_score, BASE_RISK);
    }

    #[test]
    fn test_risk_status_not_trimmed() {
        assert_eq!(predict_risk(&shipment(" delayed ")).risk_score, BASE_RISK);
    }

    #[test]
    fn test_risk_explanation_constant() {
        for status in ["delayed", "exception", "delivered"] {
            assert_eq!(
                predict_risk(&shipment(status)).explanation.as_deref(),
                Some(RISK_EXPLANATION)
            );
        }
    }

    #[test]
    fn test_outputs_are_deterministic() {
        let input = shipment("Exception");
        assert_eq!(predict_risk(&input), predict_risk(&input));
        assert_eq!(classify("a submission"), classify("a submission"));
    }
}
