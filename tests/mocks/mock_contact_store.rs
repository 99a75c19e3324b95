use contact_book::error::{StorageError, StorageResult};
use contact_book::models::ContactDirectory;
use contact_book::repositories::ContactStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Keeps the "saved" book in memory, can be told to fail saves, and tracks
/// method calls for verification. Clones share state, so a test can keep a
/// handle after boxing one into an `AppContext`.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactStore {
    saved: Arc<Mutex<Option<ContactDirectory>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a new empty MockContactStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that loads `directory`.
    pub fn with_directory(directory: ContactDirectory) -> Self {
        let store = Self::new();
        *store.saved.lock().unwrap() = Some(directory);
        store
    }

    /// The most recently saved book, if any.
    pub fn saved(&self) -> Option<ContactDirectory> {
        self.saved.lock().unwrap().clone()
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactStore for MockContactStore {
    fn load(&self) -> StorageResult<ContactDirectory> {
        self.track_call("load");
        Ok(self.saved.lock().unwrap().clone().unwrap_or_default())
    }

    fn save(&self, directory: &ContactDirectory) -> StorageResult<()> {
        self.track_call("save");
        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io {
                path: "mock".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "save disabled"),
            });
        }
        *self.saved.lock().unwrap() = Some(directory.clone());
        Ok(())
    }
}
