//! Calculation input model and deduction scheme.
//!
//! This module defines the [`CalculationInput`] struct and the
//! [`DeductionScheme`] enum that together describe one pay estimation request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents the deduction scheme applied to gross pay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionScheme {
    /// Standard daily-labor payroll deductions: employment insurance,
    /// optionally national pension and health/long-term-care insurance,
    /// plus income tax with the 10% local surtax.
    #[default]
    Standard,
    /// Flat 3.3% business-income withholding, as applied to contractors
    /// paid through a staffing agency.
    #[serde(rename = "flat_3_3")]
    Flat33,
}

/// One pay estimation request across the presentation boundary.
///
/// A fresh [`crate::models::CalculationResult`] is derived from this input on
/// every invocation; the input is never mutated by the engine.
///
/// # Example
///
/// ```
/// use daywage_engine::models::{CalculationInput, DeductionScheme};
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput {
///     daily_wage: Decimal::from(180_000),
///     work_days: Decimal::from(20),
///     scheme: DeductionScheme::Standard,
///     apply_insurance: true,
/// };
/// assert!(input.validate().is_ok());
/// assert_eq!(input.gross_pay(), Decimal::from(3_600_000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// The daily wage in won.
    pub daily_wage: Decimal,
    /// The number of work days; half-days are expressed as fractions.
    pub work_days: Decimal,
    /// The deduction scheme to apply.
    pub scheme: DeductionScheme,
    /// Whether national pension and health insurance contributions apply
    /// (8+ work days per month). Only consulted under the standard scheme.
    pub apply_insurance: bool,
}

impl CalculationInput {
    /// Validates the input, rejecting negative wage or work days.
    ///
    /// The calculator itself never fails for validated input, so this is the
    /// only gate between the presentation boundary and the arithmetic.
    pub fn validate(&self) -> EngineResult<()> {
        if self.daily_wage < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "daily_wage".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.work_days < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "work_days".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the gross pay before any deductions.
    pub fn gross_pay(&self) -> Decimal {
        self.daily_wage * self.work_days
    }

    /// Returns true if social-insurance contributions apply.
    ///
    /// The insurance flag is only meaningful under the standard scheme; under
    /// flat 3.3% withholding no insurance contributions are ever deducted.
    pub fn insurance_applies(&self) -> bool {
        self.scheme == DeductionScheme::Standard && self.apply_insurance
    }
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            daily_wage: Decimal::from(180_000),
            work_days: Decimal::from(20),
            scheme: DeductionScheme::Standard,
            apply_insurance: true,
        }
    }
}
