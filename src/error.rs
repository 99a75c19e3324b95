//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{FormatError, ValidationError};
use thiserror::Error;

/// Errors a command handler can return.
///
/// Every variant is recovered at the dispatch boundary and turned into the
/// fixed message returned by [`CommandError::user_message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Malformed input where a value is expected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Too few arguments for the command
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// No contact with the given name
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Phone number failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Birthday failed to parse
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl CommandError {
    /// The message shown to the user in place of this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "Enter a valid argument for the command.",
            Self::MissingArgument(_) => "Enter the argument for the command.",
            Self::NotFound(_) => "There is no such contact.",
            Self::Validation(ValidationError::InvalidPhone(_)) => {
                "The phone number must be 10 digits"
            }
            // A blank name is a malformed value rather than a bad phone
            Self::Validation(ValidationError::EmptyName) => {
                "Enter a valid argument for the command."
            }
            Self::Format(_) => "Invalid date format. Use DD.MM.YYYY",
        }
    }
}

/// Errors that can occur while loading or saving the contact book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a valid contact book
    #[error("Failed to parse contact book: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum AppError {
    /// Loading or saving the book failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Reading input or writing output failed
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
