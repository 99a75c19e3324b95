//! Contact Book - an interactive command-line contact manager.
//!
//! Stores names, phone numbers, and birthdays, and tells you whom to
//! congratulate in the coming week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phone numbers, birthdays)
//! - **models**: Contact records and the directory that owns them
//! - **repositories**: Loading and saving the directory
//! - **commands**: Console command parsing, handlers, and dispatch
//! - **app**: Application context and the console loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod app;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use app::{run, AppContext};
pub use commands::{dispatch, Outcome};
pub use config::Config;
pub use domain::{parse_birthday, validate_phone, Birthday, ContactName, PhoneNumber};
pub use error::{AppError, CommandError, ConfigError, StorageError};
pub use models::{ContactDirectory, ContactRecord, UpcomingBirthday};
pub use repositories::{ContactStore, JsonFileStore};
