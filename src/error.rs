//! Error types for the take-home pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a pay estimation.

use thiserror::Error;

/// The main error type for the take-home pay engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use daywage_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Rate table file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Rate table file was not found at the specified path.
    #[error("Rate table file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rate table file could not be parsed.
    #[error("Failed to parse rate table file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A calculation input field was out of range or inconsistent.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
