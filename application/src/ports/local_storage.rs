//! Local storage port
//!
//! A flat string-keyed, string-valued store scoped to one user and device,
//! in the manner of a browser's `localStorage`. Values are opaque strings;
//! callers serialize their own data.

use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

/// Errors from a storage backend
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O failed for {path}: {message}")]
    Io { path: String, message: String },

    #[error("Storage serialization failed: {0}")]
    Serialization(String),

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Port for durable key-value storage
///
/// Implementations live in the infrastructure layer. Methods take `&self`;
/// implementations synchronize internally so the store can be shared.
pub trait LocalStorage: Send + Sync {
    /// Read one entry (`None` when absent)
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Create or replace one entry
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete one entry (absent keys are not an error)
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Non-durable storage that lives as long as the value
///
/// Used for `--ephemeral` sessions and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with entries
    pub fn with_items<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            items: Mutex::new(
                items
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
        }
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        items.remove(key);
        Ok(())
    }
}
