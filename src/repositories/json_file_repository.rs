//! JSON file implementation of the contact store.

use crate::error::{StorageError, StorageResult};
use crate::models::ContactDirectory;
use crate::repositories::traits::ContactStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Contact store backed by a single pretty-printed JSON file.
///
/// Saving truncates and rewrites the file in place; there is no
/// temporary file or atomic rename.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl ContactStore for JsonFileStore {
    fn load(&self) -> StorageResult<ContactDirectory> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "No contact book at {}, starting empty",
                    self.path.display()
                );
                return Ok(ContactDirectory::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let directory: ContactDirectory = serde_json::from_str(&contents)?;
        debug!(
            "Loaded {} contacts from {}",
            directory.len(),
            self.path.display()
        );
        Ok(directory)
    }

    fn save(&self, directory: &ContactDirectory) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(directory)?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        debug!(
            "Saved {} contacts to {}",
            directory.len(),
            self.path.display()
        );
        Ok(())
    }
}
