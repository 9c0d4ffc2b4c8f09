//! Key/value persistence boundary.
//!
//! The host platform supplies the real store (extension-local storage in
//! the browser); [`MemoryStore`] backs tests and headless use.
//! Values are JSON-encoded strings. Writes from any instance, including
//! other panels, surface as [`StorageChange`] records on the platform's
//! notification stream and are fed to the note store for reconciliation.

use std::collections::HashMap;

/// Failure reported by a storage backend.
#[derive(Debug, thiserror::Error)]
#[error("storage backend: {0}")]
pub struct StorageError(pub String);

/// Mapping-based persistent store.
///
/// Reads and writes are last-write-wins; no ordering is guaranteed relative
/// to concurrent writers beyond that.
pub trait KeyValueStore {
    /// Fetch the requested keys. Absent keys are omitted from the result.
    fn get(&self, keys: &[&str]) -> Result<HashMap<String, String>, StorageError>;

    /// Write all entries.
    fn set(&mut self, entries: &[(&str, String)]) -> Result<(), StorageError>;

    /// Delete one key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// One key's change as delivered by the store's notification stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageChange {
    pub key: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

impl StorageChange {
    pub fn new(key: &str, old_value: Option<&str>, new_value: Option<&str>) -> Self {
        Self {
            key: key.to_string(),
            old_value: old_value.map(str::to_string),
            new_value: new_value.map(str::to_string),
        }
    }
}

/// In-memory store for tests and single-process use.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value access, mainly for assertions.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, keys: &[&str]) -> Result<HashMap<String, String>, StorageError> {
        Ok(keys
            .iter()
            .filter_map(|key| {
                self.entries
                    .get(*key)
                    .map(|value| (key.to_string(), value.clone()))
            })
            .collect())
    }

    fn set(&mut self, entries: &[(&str, String)]) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.entries.insert(key.to_string(), value.clone());
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
