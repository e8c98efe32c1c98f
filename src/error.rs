//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a calculation.
//!
//! Only malformed input is an error: negative monetary amounts, an end time
//! that is not after the start time, missing or impossible dates. Compliance
//! conditions (minimum-wage shortfalls, exceeded allowance caps, leave
//! over-use, sub-one-year severance tenure) are ordinary return values
//! carried as [`crate::models::ComplianceFlag`]s.

use thiserror::Error;

/// The main error type for the payroll calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::RuleSetNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Rule set file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Rule set file was not found at the specified path.
    #[error("Rule set file not found: {path}")]
    RuleSetNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rule set file could not be parsed.
    #[error("Failed to parse rule set file '{path}': {message}")]
    RuleSetParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift schedule was invalid or contained inconsistent data.
    #[error("Invalid schedule: {message}")]
    InvalidSchedule {
        /// A description of what made the schedule invalid.
        message: String,
    },

    /// A monetary amount was invalid (negative or non-finite).
    #[error("Invalid amount for '{field}': {message}")]
    InvalidAmount {
        /// The field that was invalid.
        field: String,
        /// A description of what made the amount invalid.
        message: String,
    },

    /// A date input was invalid or impossible.
    #[error("Invalid date for '{field}': {message}")]
    InvalidDate {
        /// The field that was invalid.
        field: String,
        /// A description of what made the date invalid.
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
