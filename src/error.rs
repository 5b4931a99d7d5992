//! Error types for the take-home pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that unparseable shift times are not errors: the duration functions
//! recover them locally (see [`crate::calculation::ShiftHours`]).

use thiserror::Error;

/// The main error type for the take-home pay engine.
///
/// # Example
///
/// ```
/// use take_home_pay::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tax.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tax.yaml");
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

    /// The tax table is not a sorted, contiguous set of brackets.
    #[error("Invalid tax table: {message}")]
    InvalidTaxTable {
        /// What is wrong with the table.
        message: String,
    },

    /// A form field was missing or out of range.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No stored record exists at the given position.
    #[error("Record not found at position {index} (session holds {len} records)")]
    RecordNotFound {
        /// The requested position.
        index: usize,
        /// The number of records in the session.
        len: usize,
    },

    /// An update was requested while no record was being edited.
    #[error("No record is being edited")]
    NoRecordBeingEdited,

    /// The session id is unknown.
    #[error("Session not found: {id}")]
    SessionNotFound {
        /// The requested session id.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
