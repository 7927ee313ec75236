//! Request types for the take-home pay engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CalculationInput, DeductionScheme};

/// Request body for the `/calculate` endpoint.
///
/// Every field is optional; omitted fields fall back to the same defaults
/// the input form pre-fills: a 180,000-won daily wage, 20 work days, the
/// standard scheme, and insurance contributions applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The daily wage in won.
    #[serde(default = "default_daily_wage")]
    pub daily_wage: Decimal,
    /// The number of work days; half-days are expressed as fractions.
    #[serde(default = "default_work_days")]
    pub work_days: Decimal,
    /// The deduction scheme to apply.
    #[serde(default)]
    pub scheme: DeductionScheme,
    /// Whether national pension and health insurance contributions apply
    /// (8+ work days per month). Only read under the standard scheme.
    #[serde(default = "default_apply_insurance")]
    pub apply_insurance: bool,
}

fn default_daily_wage() -> Decimal {
    Decimal::from(180_000)
}

fn default_work_days() -> Decimal {
    Decimal::from(20)
}

fn default_apply_insurance() -> bool {
    true
}

impl From<CalculationRequest> for CalculationInput {
    fn from(req: CalculationRequest) -> Self {
        CalculationInput {
            daily_wage: req.daily_wage,
            work_days: req.work_days,
            scheme: req.scheme,
            apply_insurance: req.apply_insurance,
        }
    }
}
