//! Gross pay calculation functionality.
//!
//! This module computes the pay before any deductions from the daily wage
//! and the number of work days.

use rust_decimal::Decimal;

use crate::models::{AuditStep, CalculationInput};

/// The result of a gross pay calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct GrossPayResult {
    /// The gross pay in won (daily wage x work days).
    pub gross_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the gross pay for a calculation input.
///
/// Gross pay is the daily wage multiplied by the number of work days.
/// Work days may be fractional (half-days), so the product may carry
/// fractional won; no truncation is applied here.
///
/// # Arguments
///
/// * `input` - The validated calculation input
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use daywage_engine::calculation::calculate_gross_pay;
/// use daywage_engine::models::CalculationInput;
/// use rust_decimal::Decimal;
///
/// let result = calculate_gross_pay(&CalculationInput::default(), 1);
/// assert_eq!(result.gross_pay, Decimal::from(3_600_000));
/// ```
pub fn calculate_gross_pay(input: &CalculationInput, step_number: u32) -> GrossPayResult {
    let gross_pay = input.gross_pay();

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_pay".to_string(),
        rule_name: "Gross Pay".to_string(),
        input: serde_json::json!({
            "daily_wage": input.daily_wage.normalize().to_string(),
            "work_days": input.work_days.normalize().to_string()
        }),
        output: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string()
        }),
        reasoning: format!(
            "₩{} x {} days = ₩{}",
            input.daily_wage.normalize(),
            input.work_days.normalize(),
            gross_pay.normalize()
        ),
    };

    GrossPayResult {
        gross_pay,
        audit_step,
    }
}
