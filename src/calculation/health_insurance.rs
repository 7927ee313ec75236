//! Health and long-term-care insurance calculation functionality.
//!
//! This module computes the worker-share health insurance contribution and
//! its long-term-care surcharge, emitted together as one combined line.

use rust_decimal::Decimal;

use crate::config::StandardRates;
use crate::models::{AuditStep, DeductionCategory, DeductionLine};

/// The result of a health and care insurance calculation.
#[derive(Debug, Clone)]
pub struct HealthAndCareResult {
    /// The combined health + care deduction line, or `None` when
    /// contributions do not apply.
    pub line: Option<DeductionLine>,
    /// The health insurance portion, truncated.
    pub health_insurance: Decimal,
    /// The long-term-care portion, truncated.
    pub long_term_care: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the health insurance contribution and long-term-care surcharge.
///
/// Health insurance is 3.545% of gross pay, truncated to whole won. The
/// long-term-care surcharge is 12.95% of the already-truncated health
/// insurance amount, truncated again. The surcharge base is the truncated
/// health amount, not the raw product; order matters for compatibility.
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
/// use daywage_engine::calculation::calculate_health_and_care;
/// use daywage_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::korea_2025();
/// let result = calculate_health_and_care(Decimal::from(3_600_000), true, &rates.standard, 1);
/// assert_eq!(result.health_insurance, Decimal::from(127_620));
/// assert_eq!(result.long_term_care, Decimal::from(16_526));
/// ```
pub fn calculate_health_and_care(
    gross_pay: Decimal,
    applies: bool,
    rates: &StandardRates,
    step_number: u32,
) -> HealthAndCareResult {
    if !applies {
        let audit_step = AuditStep {
            step_number,
            rule_id: "health_and_care".to_string(),
            rule_name: "Health + Long-Term Care Insurance".to_string(),
            input: serde_json::json!({
                "gross_pay": gross_pay.normalize().to_string(),
                "insurance_applies": false
            }),
            output: serde_json::json!({
                "line_emitted": false
            }),
            reasoning: "No health insurance contribution - under 8 work days in the month"
                .to_string(),
        };

        return HealthAndCareResult {
            line: None,
            health_insurance: Decimal::ZERO,
            long_term_care: Decimal::ZERO,
            audit_step,
        };
    }

    let health_insurance = (gross_pay * rates.health_insurance).trunc();
    let long_term_care = (health_insurance * rates.long_term_care).trunc();
    let amount = health_insurance + long_term_care;

    let audit_step = AuditStep {
        step_number,
        rule_id: "health_and_care".to_string(),
        rule_name: "Health + Long-Term Care Insurance".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "health_rate": rates.health_insurance.normalize().to_string(),
            "care_rate": rates.long_term_care.normalize().to_string(),
            "insurance_applies": true
        }),
        output: serde_json::json!({
            "health_insurance": health_insurance.normalize().to_string(),
            "long_term_care": long_term_care.normalize().to_string(),
            "amount": amount.normalize().to_string(),
            "line_emitted": true
        }),
        reasoning: format!(
            "health trunc(₩{} x {}) = ₩{}; care trunc(₩{} x {}) = ₩{}; combined ₩{}",
            gross_pay.normalize(),
            rates.health_insurance.normalize(),
            health_insurance.normalize(),
            health_insurance.normalize(),
            rates.long_term_care.normalize(),
            long_term_care.normalize(),
            amount.normalize()
        ),
    };

    HealthAndCareResult {
        line: Some(DeductionLine {
            category: DeductionCategory::HealthAndCareInsurance,
            amount,
        }),
        health_insurance,
        long_term_care,
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

    /// HC-001: default gross, both portions truncated
    #[test]
    fn test_health_and_care_default_gross() {
        let result = calculate_health_and_care(dec("3600000"), true, &standard_rates(), 1);

        // health: trunc(3600000 x 0.03545) = 127620
        // care: trunc(127620 x 0.1295) = trunc(16526.79) = 16526
        assert_eq!(result.health_insurance, dec("127620"));
        assert_eq!(result.long_term_care, dec("16526"));

        let line = result.line.unwrap();
        assert_eq!(line.category, DeductionCategory::HealthAndCareInsurance);
        assert_eq!(line.amount, dec("144146"));
    }

    /// HC-002: care surcharge is computed on the truncated health amount
    #[test]
    fn test_care_base_is_truncated_health() {
        // gross 100003: raw health = 3545.10635, truncated to 3545
        // care on truncated base: trunc(3545 x 0.1295) = trunc(459.0775) = 459
        let result = calculate_health_and_care(dec("100003"), true, &standard_rates(), 1);

        assert_eq!(result.health_insurance, dec("3545"));
        assert_eq!(result.long_term_care, dec("459"));
    }

    /// HC-003: no line when insurance does not apply
    #[test]
    fn test_health_absent_without_insurance() {
        let result = calculate_health_and_care(dec("3600000"), false, &standard_rates(), 1);

        assert!(result.line.is_none());
        assert_eq!(result.health_insurance, Decimal::ZERO);
        assert_eq!(result.long_term_care, Decimal::ZERO);
    }

    /// HC-004: zero gross still emits a zero line when insurance applies
    #[test]
    fn test_health_zero_gross_emits_zero_line() {
        let result = calculate_health_and_care(Decimal::ZERO, true, &standard_rates(), 1);

        let line = result.line.unwrap();
        assert_eq!(line.amount, Decimal::ZERO);
        assert!(!line.is_displayed());
    }

    #[test]
    fn test_audit_output_records_both_portions() {
        let result = calculate_health_and_care(dec("3600000"), true, &standard_rates(), 5);

        assert_eq!(result.audit_step.step_number, 5);
        assert_eq!(
            result.audit_step.output["health_insurance"].as_str().unwrap(),
            "127620"
        );
        assert_eq!(
            result.audit_step.output["long_term_care"].as_str().unwrap(),
            "16526"
        );
    }
}
