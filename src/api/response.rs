//! Response types for the take-home pay engine API.
//!
//! This module defines the display-facing calculation response, plus the
//! error response structures for the HTTP API. The display rules live here:
//! amounts are truncated to whole won and zero-amount deduction lines are
//! filtered from the itemized breakdown.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AuditTrace, CalculationResult, DeductionScheme};

/// Static disclaimer attached to every calculation response.
const DISCLAIMER: &str = "Estimate only. Actual take-home pay may differ by employer policy, \
                          withholding method, and union or mutual-aid dues.";

/// One deduction line as displayed across the presentation boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionLineView {
    /// The stable label identifier for the deduction category.
    pub label: String,
    /// The deducted amount in whole won, truncated.
    pub amount: Decimal,
}

/// Response body for the `/calculate` endpoint.
///
/// Summary amounts are truncated to whole won, and deduction lines with a
/// zero (or negative) amount are omitted from the breakdown even though
/// they contributed to the total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The deduction scheme that was applied.
    pub scheme: DeductionScheme,
    /// Gross pay in whole won.
    pub gross_pay: Decimal,
    /// Total deduction in whole won.
    pub total_deduction: Decimal,
    /// Net (take-home) pay in whole won.
    pub net_pay: Decimal,
    /// Itemized deduction breakdown, zero-amount lines filtered.
    pub deductions: Vec<DeductionLineView>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
    /// Static disclaimer about the estimate.
    pub note: String,
}

impl From<CalculationResult> for CalculationResponse {
    fn from(result: CalculationResult) -> Self {
        let deductions = result
            .deductions
            .iter()
            .filter(|line| line.is_displayed())
            .map(|line| DeductionLineView {
                label: line.category.label().to_string(),
                amount: line.truncated_amount(),
            })
            .collect();

        Self {
            calculation_id: result.calculation_id,
            timestamp: result.timestamp,
            engine_version: result.engine_version,
            scheme: result.scheme,
            gross_pay: result.totals.gross_pay.trunc(),
            total_deduction: result.totals.total_deduction.trunc(),
            net_pay: result.totals.net_pay.trunc(),
            deductions,
            audit_trace: result.audit_trace,
            note: DISCLAIMER.to_string(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an invalid input error response.
    pub fn invalid_input(field: &str, message: &str) -> Self {
        Self::with_details(
            "INVALID_INPUT",
            format!("Invalid input field '{}': {}", field, message),
            format!("The field '{}' must be a non-negative number", field),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Rate table error",
                    format!("Rate table file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Rate table parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_input(&field, &message),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
