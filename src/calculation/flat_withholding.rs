//! Flat 3.3% contractor withholding calculation.
//!
//! This module computes the single business-income-tax deduction line for
//! workers paid as contractors through a staffing agency.

use rust_decimal::Decimal;

use crate::config::FlatRates;
use crate::models::{AuditStep, DeductionCategory, DeductionLine};

/// The result of a flat withholding calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct FlatWithholdingResult {
    /// The single business-income-tax deduction line.
    pub line: DeductionLine,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the flat 3.3% business income tax on gross pay.
///
/// The line amount is NOT truncated here. Unlike the standard scheme, where
/// every category subtotal is truncated before summation, the flat scheme
/// carries the fractional amount through the deduction total and truncates
/// only at display time. The asymmetry is deliberate and preserved for
/// numerical compatibility.
///
/// # Arguments
///
/// * `gross_pay` - The gross pay in won
/// * `rates` - The flat-scheme rates from the rate table
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use daywage_engine::calculation::calculate_flat_withholding;
/// use daywage_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::korea_2025();
/// let result = calculate_flat_withholding(Decimal::from(3_600_000), &rates.flat, 1);
/// assert_eq!(result.line.amount, Decimal::new(118_800_000, 3));
/// ```
pub fn calculate_flat_withholding(
    gross_pay: Decimal,
    rates: &FlatRates,
    step_number: u32,
) -> FlatWithholdingResult {
    let amount = gross_pay * rates.withholding;

    let audit_step = AuditStep {
        step_number,
        rule_id: "flat_withholding".to_string(),
        rule_name: "Business Income Tax (3.3%)".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "rate": rates.withholding.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string(),
            "truncated": false
        }),
        reasoning: format!(
            "₩{} x {} = ₩{}",
            gross_pay.normalize(),
            rates.withholding.normalize(),
            amount.normalize()
        ),
    };

    FlatWithholdingResult {
        line: DeductionLine {
            category: DeductionCategory::BusinessIncomeTax,
            amount,
        },
        audit_step,
    }
}
