//! Data models for the contact book.
//!
//! This module contains the contact record and the directory that owns
//! every record and answers the upcoming-birthday query.

pub mod directory;
pub mod record;

pub use directory::{ContactDirectory, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
pub use record::ContactRecord;
