//! Top-level take-home pay assembly.
//!
//! This module wires the per-rule calculation functions into a complete
//! deduction breakdown for one calculation input.

use std::time::Instant;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CalculationInput, CalculationResult, DeductionLine,
    DeductionScheme, PayTotals,
};

use super::{
    calculate_employment_insurance, calculate_flat_withholding, calculate_gross_pay,
    calculate_health_and_care, calculate_income_tax, calculate_national_pension,
};

/// Estimates the take-home pay for one calculation input.
///
/// Validates the input, computes gross pay, applies the selected deduction
/// scheme, and assembles the deduction lines in display order:
///
/// - **Flat 3.3%**: the single business-income-tax line, untruncated.
/// - **Standard**: employment insurance (always), national pension and
///   health + long-term-care insurance (only when the insurance flag is
///   set), then income tax including the local surtax (always, even when
///   zero).
///
/// Under the standard scheme each line amount is truncated before the lines
/// are summed; under the flat scheme the fractional amount flows into the
/// total and is truncated only at display time. Net pay is gross minus the
/// total and is not clamped; when deductions exceed gross a
/// `NEGATIVE_NET_PAY` warning is attached to the audit trace.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidInput`] when the daily wage
/// or work days are negative. For any validated input the calculation
/// itself cannot fail.
///
/// # Examples
///
/// ```
/// use daywage_engine::calculation::calculate_take_home;
/// use daywage_engine::config::RateTable;
/// use daywage_engine::models::CalculationInput;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::korea_2025();
/// let result = calculate_take_home(&CalculationInput::default(), &rates).unwrap();
/// assert_eq!(result.totals.gross_pay, Decimal::from(3_600_000));
/// assert_eq!(result.totals.net_pay, Decimal::from(3_243_634));
/// ```
pub fn calculate_take_home(
    input: &CalculationInput,
    rates: &RateTable,
) -> EngineResult<CalculationResult> {
    input.validate()?;

    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let gross_result = calculate_gross_pay(input, step_number);
    let gross_pay = gross_result.gross_pay;
    steps.push(gross_result.audit_step);
    step_number += 1;

    let mut deductions: Vec<DeductionLine> = Vec::new();

    match input.scheme {
        DeductionScheme::Flat33 => {
            let flat_result = calculate_flat_withholding(gross_pay, &rates.flat, step_number);
            steps.push(flat_result.audit_step);
            deductions.push(flat_result.line);
        }
        DeductionScheme::Standard => {
            let insurance_applies = input.insurance_applies();

            let employment_result =
                calculate_employment_insurance(gross_pay, &rates.standard, step_number);
            steps.push(employment_result.audit_step);
            deductions.push(employment_result.line);
            step_number += 1;

            let pension_result = calculate_national_pension(
                gross_pay,
                insurance_applies,
                &rates.standard,
                step_number,
            );
            steps.push(pension_result.audit_step);
            deductions.extend(pension_result.line);
            step_number += 1;

            let health_result = calculate_health_and_care(
                gross_pay,
                insurance_applies,
                &rates.standard,
                step_number,
            );
            steps.push(health_result.audit_step);
            deductions.extend(health_result.line);
            step_number += 1;

            let income_tax_result = calculate_income_tax(
                input.daily_wage,
                input.work_days,
                &rates.standard,
                step_number,
            );
            steps.push(income_tax_result.audit_step);
            deductions.push(income_tax_result.line);
        }
    }

    // Zero-amount lines stay in the sum; display filtering happens at the
    // presentation boundary.
    let total_deduction: Decimal = deductions.iter().map(|line| line.amount).sum();
    let net_pay = gross_pay - total_deduction;

    if net_pay < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "NEGATIVE_NET_PAY".to_string(),
            message: format!(
                "Deductions (₩{}) exceed gross pay (₩{})",
                total_deduction.normalize(),
                gross_pay.normalize()
            ),
            severity: "high".to_string(),
        });
    }

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: chrono::Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        scheme: input.scheme,
        deductions,
        totals: PayTotals {
            gross_pay,
            total_deduction,
            net_pay,
        },
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}
