//! Daily-labor income tax calculation functionality.
//!
//! This module computes the simplified income tax for daily-wage labor,
//! including the 10% local surtax, with the 150,000-won daily non-taxable
//! threshold and the 55% small-earner reduction.

use rust_decimal::Decimal;

use crate::config::StandardRates;
use crate::models::{AuditStep, DeductionCategory, DeductionLine};

/// The result of an income tax calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// The combined income tax + local surtax deduction line. Always emitted
    /// under the standard scheme, even when the amount is zero.
    pub line: DeductionLine,
    /// The income tax portion over the whole period, truncated.
    pub income_tax: Decimal,
    /// The local surtax portion over the whole period, truncated.
    pub local_tax: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the income tax and local surtax over the work period.
///
/// Only the portion of the daily wage above the non-taxable threshold is
/// taxed, at the statutory 6% rate with 55% reduced (an effective 2.7% per
/// taxable won). The local surtax is 10% of the income tax. Both totals are
/// truncated AFTER multiplying the per-day amount by the number of work
/// days, never per-day first; the order matters when work days are
/// fractional.
///
/// # Arguments
///
/// * `daily_wage` - The daily wage in won
/// * `work_days` - The number of work days, possibly fractional
/// * `rates` - The standard-scheme rates from the rate table
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use daywage_engine::calculation::calculate_income_tax;
/// use daywage_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::korea_2025();
/// let result = calculate_income_tax(
///     Decimal::from(180_000),
///     Decimal::from(20),
///     &rates.standard,
///     1,
/// );
/// assert_eq!(result.income_tax, Decimal::from(16_200));
/// assert_eq!(result.local_tax, Decimal::from(1_620));
/// ```
pub fn calculate_income_tax(
    daily_wage: Decimal,
    work_days: Decimal,
    rates: &StandardRates,
    step_number: u32,
) -> IncomeTaxResult {
    let taxable_daily = (daily_wage - rates.non_taxable_daily).max(Decimal::ZERO);
    let daily_income_tax = taxable_daily * rates.income_tax_rate * rates.income_tax_reduction;
    let daily_local_tax = daily_income_tax * rates.local_surtax;

    let income_tax = (daily_income_tax * work_days).trunc();
    let local_tax = (daily_local_tax * work_days).trunc();
    let amount = income_tax + local_tax;

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax".to_string(),
        rule_name: "Income Tax (incl. Local Surtax)".to_string(),
        input: serde_json::json!({
            "daily_wage": daily_wage.normalize().to_string(),
            "work_days": work_days.normalize().to_string(),
            "non_taxable_daily": rates.non_taxable_daily.normalize().to_string()
        }),
        output: serde_json::json!({
            "taxable_daily": taxable_daily.normalize().to_string(),
            "daily_income_tax": daily_income_tax.normalize().to_string(),
            "daily_local_tax": daily_local_tax.normalize().to_string(),
            "income_tax": income_tax.normalize().to_string(),
            "local_tax": local_tax.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "taxable ₩{}/day; income tax trunc(₩{} x {}) = ₩{}; local trunc(₩{} x {}) = ₩{}",
            taxable_daily.normalize(),
            daily_income_tax.normalize(),
            work_days.normalize(),
            income_tax.normalize(),
            daily_local_tax.normalize(),
            work_days.normalize(),
            local_tax.normalize()
        ),
    };

    IncomeTaxResult {
        line: DeductionLine {
            category: DeductionCategory::IncomeTaxInclLocal,
            amount,
        },
        income_tax,
        local_tax,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RateTable;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn standard_rates() -> StandardRates {
        RateTable::korea_2025().standard
    }

    /// IT-001: default inputs
    #[test]
    fn test_income_tax_default_inputs() {
        let result = calculate_income_tax(dec("180000"), dec("20"), &standard_rates(), 1);

        // taxable: 30000/day; income tax: 30000 x 0.06 x 0.45 = 810/day
        assert_eq!(result.income_tax, dec("16200"));
        assert_eq!(result.local_tax, dec("1620"));
        assert_eq!(result.line.category, DeductionCategory::IncomeTaxInclLocal);
        assert_eq!(result.line.amount, dec("17820"));
    }

    /// IT-002: wage at the threshold is fully non-taxable
    #[test]
    fn test_income_tax_at_threshold_is_zero() {
        let result = calculate_income_tax(dec("150000"), dec("20"), &standard_rates(), 1);

        assert_eq!(result.income_tax, Decimal::ZERO);
        assert_eq!(result.local_tax, Decimal::ZERO);
        assert_eq!(result.line.amount, Decimal::ZERO);
        assert!(!result.line.is_displayed());
    }

    /// IT-003: wage below the threshold is fully non-taxable
    #[test]
    fn test_income_tax_below_threshold_is_zero() {
        let result = calculate_income_tax(dec("100000"), dec("10"), &standard_rates(), 1);
        assert_eq!(result.line.amount, Decimal::ZERO);
    }

    /// IT-004: truncation happens on the period total, not per day
    #[test]
    fn test_truncation_on_period_total() {
        // daily wage 150037: taxable 37/day, daily income tax 0.999
        // 10.5 days: 0.999 x 10.5 = 10.4895 -> 10 (per-day truncation would give 0)
        let result = calculate_income_tax(dec("150037"), dec("10.5"), &standard_rates(), 1);

        assert_eq!(result.income_tax, dec("10"));
        // local: 0.0999/day x 10.5 = 1.04895 -> 1
        assert_eq!(result.local_tax, dec("1"));
    }

    /// IT-005: fractional work days
    #[test]
    fn test_income_tax_fractional_days() {
        // taxable 30000/day, 810/day income tax x 20.5 = 16605
        let result = calculate_income_tax(dec("180000"), dec("20.5"), &standard_rates(), 1);

        assert_eq!(result.income_tax, dec("16605"));
        // local: 81/day x 20.5 = 1660.5 -> 1660
        assert_eq!(result.local_tax, dec("1660"));
    }

    #[test]
    fn test_audit_output_records_taxable_daily() {
        let result = calculate_income_tax(dec("180000"), dec("20"), &standard_rates(), 6);

        assert_eq!(result.audit_step.step_number, 6);
        assert_eq!(
            result.audit_step.output["taxable_daily"].as_str().unwrap(),
            "30000"
        );
        assert_eq!(
            result.audit_step.output["daily_income_tax"].as_str().unwrap(),
            "810"
        );
    }
}
