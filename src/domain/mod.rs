//! Domain value objects and validators.
//!
//! This module contains type-safe wrappers for contact names, phone
//! numbers, and birthdays. These value objects validate at construction
//! time and prevent invalid data from being represented in the book.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{parse_birthday, Birthday, BIRTHDAY_FORMAT};
pub use errors::{FormatError, ValidationError};
pub use name::ContactName;
pub use phone::{validate_phone, PhoneNumber};
