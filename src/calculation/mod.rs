//! Calculation logic for the take-home pay engine.
//!
//! This module contains all the calculation functions for estimating net pay,
//! including gross pay, the flat 3.3% contractor withholding, employment
//! insurance, national pension, health and long-term-care insurance, the
//! simplified daily-labor income tax with local surtax, and the top-level
//! assembly of a full deduction breakdown.

mod employment_insurance;
mod engine;
mod flat_withholding;
mod gross_pay;
mod health_insurance;
mod income_tax;
mod national_pension;

pub use employment_insurance::{EmploymentInsuranceResult, calculate_employment_insurance};
pub use engine::calculate_take_home;
pub use flat_withholding::{FlatWithholdingResult, calculate_flat_withholding};
pub use gross_pay::{GrossPayResult, calculate_gross_pay};
pub use health_insurance::{HealthAndCareResult, calculate_health_and_care};
pub use income_tax::{IncomeTaxResult, calculate_income_tax};
pub use national_pension::{NationalPensionResult, calculate_national_pension};
