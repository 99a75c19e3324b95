//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use crate::models::UPCOMING_WINDOW_DAYS;
use std::env;
use std::path::PathBuf;

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "addressbook.json";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file the book is loaded from and saved to
    pub data_file: PathBuf,

    /// Look-ahead for the `birthdays` command in days (default: 7)
    pub birthday_window_days: i64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: Data file path (default: `addressbook.json`)
    /// - `BIRTHDAY_WINDOW_DAYS`: Birthday look-ahead, 1 to 366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let data_file = env::var("CONTACT_BOOK_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));

        if data_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let birthday_window_days =
            Self::parse_env_i64("BIRTHDAY_WINDOW_DAYS", UPCOMING_WINDOW_DAYS)?;
        if !(1..=366).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must be between 1 and 366".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_file,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            birthday_window_days: UPCOMING_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}
