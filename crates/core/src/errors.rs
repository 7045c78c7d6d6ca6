//! Core error types for the Folioview analytics layer.
//!
//! Transport errors from the API client are wrapped here so services and
//! views deal with a single error type. Missing data is not an error:
//! calculators answer `None` when there is not enough history to compute
//! something, and only genuine faults travel through [`Error`].

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use folioview_api_client::ApiError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the analytics layer.
#[derive(Error, Debug)]
pub enum Error {
    /// A dashboard API request failed (transport, auth, or protocol).
    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    /// Input validation failed (unknown keys, malformed values).
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// True when the backend answered "not found" for the requested
    /// resource. Callers use this to treat optional resources (an empty
    /// portfolio has no top performers) as absent instead of failed.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(e) if e.is_not_found())
    }
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A sort key arrived that names no holdings column. Surfaced instead
    /// of silently leaving the table unsorted.
    #[error("Unknown sort key: '{0}'")]
    UnknownSortKey(String),

    /// A window key arrived that names no supported look-back period.
    #[error("Unknown return window: '{0}'")]
    UnknownWindow(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
