//! Error types for the SCHADS pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition that can occur while loading rate tables or
//! calculating pay.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the SCHADS pay engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use schads_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/award.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/award.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate table parsed but holds values the calculator cannot use.
    #[error("Invalid rate table '{award_version}': {message}")]
    InvalidRateTable {
        /// The award version of the offending table.
        award_version: String,
        /// A description of the problem.
        message: String,
    },

    /// No rate table is loaded for the requested award version.
    #[error("Award version not found: {version}")]
    AwardVersionNotFound {
        /// The requested award version.
        version: String,
    },

    /// No rate table is effective on the requested date.
    #[error("No rate table effective on {date}")]
    RateTableNotFound {
        /// The date for which a table was requested.
        date: NaiveDate,
    },

    /// Neither the requested worker level nor the fallback level has a rate.
    #[error("Rate not found for worker level {level} in award version '{award_version}'")]
    RateNotFound {
        /// The worker level that was looked up last.
        level: u8,
        /// The award version of the table searched.
        award_version: String,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
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
