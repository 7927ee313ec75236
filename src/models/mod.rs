//! Core data models for the take-home pay engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_input;
mod calculation_result;

pub use calculation_input::{CalculationInput, DeductionScheme};
pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, DeductionCategory, DeductionLine,
    PayTotals,
};
