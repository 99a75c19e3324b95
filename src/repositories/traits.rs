//! Storage abstraction for the contact book.

use crate::error::StorageResult;
use crate::models::ContactDirectory;

/// Storage for the whole contact book.
///
/// Provides abstraction over where the book lives between sessions,
/// enabling different implementations (JSON file, in-memory mock).
pub trait ContactStore {
    /// Load the book; a store with nothing saved yet yields an empty book.
    fn load(&self) -> StorageResult<ContactDirectory>;

    /// Replace the stored book with `directory`.
    fn save(&self, directory: &ContactDirectory) -> StorageResult<()>;
}
