//! National pension calculation functionality.
//!
//! This module computes the worker-share national pension contribution,
//! which applies only when the worker clears the monthly work-day threshold
//! for social-insurance enrollment.

use rust_decimal::Decimal;

use crate::config::StandardRates;
use crate::models::{AuditStep, DeductionCategory, DeductionLine};

/// The result of a national pension calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct NationalPensionResult {
    /// The national pension deduction line, or `None` when contributions
    /// do not apply.
    pub line: Option<DeductionLine>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the national pension contribution on gross pay.
///
/// The amount is 4.5% of gross pay, truncated toward zero to whole won.
/// No contribution-base cap is applied. When `applies` is false (fewer than
/// 8 work days in the month), no line is produced at all; this differs from
/// a zero-amount line, which would still sit in the breakdown.
///
/// # Arguments
///
/// * `gross_pay` - The gross pay in won
/// * `applies` - Whether social-insurance contributions apply
/// * `rates` - The standard-scheme rates from the rate table
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use daywage_engine::calculation::calculate_national_pension;
/// use daywage_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::korea_2025();
/// let result = calculate_national_pension(Decimal::from(3_600_000), true, &rates.standard, 1);
/// assert_eq!(result.line.unwrap().amount, Decimal::from(162_000));
/// ```
pub fn calculate_national_pension(
    gross_pay: Decimal,
    applies: bool,
    rates: &StandardRates,
    step_number: u32,
) -> NationalPensionResult {
    if !applies {
        let audit_step = AuditStep {
            step_number,
            rule_id: "national_pension".to_string(),
            rule_name: "National Pension".to_string(),
            input: serde_json::json!({
                "gross_pay": gross_pay.normalize().to_string(),
                "insurance_applies": false
            }),
            output: serde_json::json!({
                "line_emitted": false
            }),
            reasoning: "No national pension contribution - under 8 work days in the month"
                .to_string(),
        };

        return NationalPensionResult {
            line: None,
            audit_step,
        };
    }

    let amount = (gross_pay * rates.national_pension).trunc();

    let audit_step = AuditStep {
        step_number,
        rule_id: "national_pension".to_string(),
        rule_name: "National Pension".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "rate": rates.national_pension.normalize().to_string(),
            "insurance_applies": true
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string(),
            "line_emitted": true
        }),
        reasoning: format!(
            "trunc(₩{} x {}) = ₩{}",
            gross_pay.normalize(),
            rates.national_pension.normalize(),
            amount.normalize()
        ),
    };

    NationalPensionResult {
        line: Some(DeductionLine {
            category: DeductionCategory::NationalPension,
            amount,
        }),
        audit_step,
    }
}
