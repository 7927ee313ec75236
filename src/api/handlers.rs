//! HTTP request handlers for the take-home pay engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_take_home;
use crate::models::CalculationInput;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the take-home pay estimate.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::validation_error(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let input: CalculationInput = request.into();
    let rates = state.config().rates();

    match calculate_take_home(&input, rates) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                scheme = ?input.scheme,
                gross_pay = %result.totals.gross_pay,
                net_pay = %result.totals.net_pay,
                duration_us = result.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            let response: CalculationResponse = result.into();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/korea-2025.yaml").expect("Failed to load config");
        AppState::new(config)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let state = create_test_state();
        let router = create_router(state);

        let body = r#"{"daily_wage": "180000", "work_days": "20", "scheme": "standard", "apply_insurance": true}"#;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        // Verify Content-Type header
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        // Verify response body is a valid CalculationResponse
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: CalculationResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.gross_pay, dec("3600000"));
        assert_eq!(result.net_pay, dec("3243634"));
        assert_eq!(result.deductions.len(), 4);
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_negative_wage_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        let body = r#"{"daily_wage": "-180000"}"#;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "INVALID_INPUT");
        assert!(error.message.contains("daily_wage"));
    }

    #[tokio::test]
    async fn test_api_004_empty_body_uses_form_defaults() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: CalculationResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.gross_pay, dec("3600000"));
        assert_eq!(result.net_pay, dec("3243634"));
    }

    #[tokio::test]
    async fn test_flat_scheme_calculation() {
        let state = create_test_state();
        let router = create_router(state);

        let body = r#"{"daily_wage": "180000", "work_days": "20", "scheme": "flat_3_3"}"#;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: CalculationResponse = serde_json::from_slice(&body).unwrap();

        // 3600000 x 0.033 = 118800
        assert_eq!(result.total_deduction, dec("118800"));
        assert_eq!(result.net_pay, dec("3481200"));
        assert_eq!(result.deductions.len(), 1);
        assert_eq!(result.deductions[0].label, "business_income_tax_3_3pct");
    }
}
