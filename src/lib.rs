//! Take-Home Pay Engine for Korean Daily-Wage Construction Workers
//!
//! This crate estimates the net (take-home) pay of a daily-wage construction
//! worker from a daily wage and a number of work days, under either the flat
//! 3.3% contractor withholding scheme or the standard payroll scheme with
//! social-insurance contributions and simplified daily-labor income tax.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
