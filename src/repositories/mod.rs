//! Persistence for the contact book.

mod json_file_repository;
mod traits;

pub use json_file_repository::JsonFileStore;
pub use traits::ContactStore;
