//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when working with records and the address book.
#[derive(Error, Debug)]
pub enum ContactError {
    /// A field value failed its validation rule
    #[error("Invalid value: {0}")]
    InvalidValue(#[from] ValidationError),

    /// A referenced record or phone number does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Reading or writing the backing file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not valid JSON for the expected layout
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
