//! Domain validation errors.

use thiserror::Error;

/// Errors raised when a phone number or contact name fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),
}

/// Errors raised when a birthday string cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The string is not a valid `DD.MM.YYYY` calendar date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
