//! Rate table configuration for the take-home pay engine.
//!
//! This module provides loading and access to the fiscal-year deduction
//! rates used by the calculation functions.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{FlatRates, RateTable, RateTableMetadata, StandardRates};
