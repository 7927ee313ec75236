//! Employment insurance calculation functionality.
//!
//! This module computes the worker-share employment insurance contribution,
//! which applies to every standard-scheme calculation regardless of the
//! insurance flag.

use rust_decimal::Decimal;

use crate::config::StandardRates;
use crate::models::{AuditStep, DeductionCategory, DeductionLine};

/// The result of an employment insurance calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct EmploymentInsuranceResult {
    /// The employment insurance deduction line.
    pub line: DeductionLine,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the employment insurance contribution on gross pay.
///
/// The amount is 0.9% of gross pay, truncated toward zero to whole won
/// before it enters the deduction total.
///
/// # Arguments
///
/// * `gross_pay` - The gross pay in won
/// * `rates` - The standard-scheme rates from the rate table
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use daywage_engine::calculation::calculate_employment_insurance;
/// use daywage_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::korea_2025();
/// let result = calculate_employment_insurance(Decimal::from(3_600_000), &rates.standard, 1);
/// assert_eq!(result.line.amount, Decimal::from(32_400));
/// ```
pub fn calculate_employment_insurance(
    gross_pay: Decimal,
    rates: &StandardRates,
    step_number: u32,
) -> EmploymentInsuranceResult {
    let amount = (gross_pay * rates.employment_insurance).trunc();

    let audit_step = AuditStep {
        step_number,
        rule_id: "employment_insurance".to_string(),
        rule_name: "Employment Insurance".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "rate": rates.employment_insurance.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string(),
            "truncated": true
        }),
        reasoning: format!(
            "trunc(₩{} x {}) = ₩{}",
            gross_pay.normalize(),
            rates.employment_insurance.normalize(),
            amount.normalize()
        ),
    };

    EmploymentInsuranceResult {
        line: DeductionLine {
            category: DeductionCategory::EmploymentInsurance,
            amount,
        },
        audit_step,
    }
}
