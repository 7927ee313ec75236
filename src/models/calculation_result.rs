//! Calculation result models for the take-home pay engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures that capture all outputs from a pay estimation, including the
//! itemized deduction lines, totals, and audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DeductionScheme;

/// Represents the category of a deduction line.
///
/// The serialized names are the stable label identifiers used across the
/// presentation boundary.
///
/// # Example
///
/// ```
/// use daywage_engine::models::DeductionCategory;
///
/// let json = serde_json::to_string(&DeductionCategory::EmploymentInsurance).unwrap();
/// assert_eq!(json, "\"employment_insurance_0_9pct\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeductionCategory {
    /// Flat 3.3% business-income withholding (contractor scheme).
    #[serde(rename = "business_income_tax_3_3pct")]
    BusinessIncomeTax,
    /// Employment insurance, 0.9% of gross pay.
    #[serde(rename = "employment_insurance_0_9pct")]
    EmploymentInsurance,
    /// National pension, 4.5% of gross pay.
    #[serde(rename = "national_pension_4_5pct")]
    NationalPension,
    /// Health insurance plus the long-term-care surcharge, combined.
    #[serde(rename = "health_and_care_insurance")]
    HealthAndCareInsurance,
    /// Daily-labor income tax including the 10% local surtax.
    #[serde(rename = "income_tax_incl_local")]
    IncomeTaxInclLocal,
}

impl DeductionCategory {
    /// Returns the stable label identifier for this category.
    pub fn label(&self) -> &'static str {
        match self {
            DeductionCategory::BusinessIncomeTax => "business_income_tax_3_3pct",
            DeductionCategory::EmploymentInsurance => "employment_insurance_0_9pct",
            DeductionCategory::NationalPension => "national_pension_4_5pct",
            DeductionCategory::HealthAndCareInsurance => "health_and_care_insurance",
            DeductionCategory::IncomeTaxInclLocal => "income_tax_incl_local",
        }
    }
}

/// Represents a single line item in a deduction breakdown.
///
/// Standard-scheme lines carry whole-won amounts (truncated before
/// summation); the flat 3.3% line may carry fractional won at the line level
/// and is truncated only for display.
///
/// # Example
///
/// ```
/// use daywage_engine::models::{DeductionCategory, DeductionLine};
/// use rust_decimal::Decimal;
///
/// let line = DeductionLine {
///     category: DeductionCategory::EmploymentInsurance,
///     amount: Decimal::from(32_400),
/// };
/// assert_eq!(line.truncated_amount(), Decimal::from(32_400));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// The deduction category.
    pub category: DeductionCategory,
    /// The deducted amount in won; non-negative.
    pub amount: Decimal,
}

impl DeductionLine {
    /// Returns the amount truncated toward zero to whole won, as displayed.
    pub fn truncated_amount(&self) -> Decimal {
        self.amount.trunc()
    }

    /// Returns true if this line is shown in the itemized breakdown.
    ///
    /// Zero-amount lines still contribute to the deduction total but are
    /// suppressed from display.
    pub fn is_displayed(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

/// Aggregated totals for a pay estimation.
///
/// # Example
///
/// ```
/// use daywage_engine::models::PayTotals;
/// use rust_decimal::Decimal;
///
/// let totals = PayTotals {
///     gross_pay: Decimal::from(3_600_000),
///     total_deduction: Decimal::from(356_366),
///     net_pay: Decimal::from(3_243_634),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayTotals {
    /// Gross pay before any deductions (daily wage x work days).
    pub gross_pay: Decimal,
    /// Sum of all deduction line amounts, including zero-valued lines.
    pub total_deduction: Decimal,
    /// Gross pay minus total deduction. Not clamped; may be negative.
    pub net_pay: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the estimation for transparency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a pay estimation.
///
/// Derived fresh from a [`crate::models::CalculationInput`] on every
/// invocation; never mutated after creation.
///
/// # Example
///
/// ```
/// use daywage_engine::models::{AuditTrace, CalculationResult, DeductionScheme, PayTotals};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = CalculationResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "1.0.0".to_string(),
///     scheme: DeductionScheme::Standard,
///     deductions: vec![],
///     totals: PayTotals {
///         gross_pay: Decimal::ZERO,
///         total_deduction: Decimal::ZERO,
///         net_pay: Decimal::ZERO,
///     },
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The deduction scheme that was applied.
    pub scheme: DeductionScheme,
    /// Deduction lines in display order. Zero-amount lines are retained here
    /// and filtered only at the presentation boundary.
    pub deductions: Vec<DeductionLine>,
    /// Aggregated totals for the calculation.
    pub totals: PayTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
