//! Key-value store for user preferences.

use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Lock error: {0}")]
    Lock(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Opaque string key-value store.
///
/// Implementations must be usable from any thread.
pub trait PreferenceStore: Send + Sync {
    /// Read a value. Missing keys are `Ok(None)`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
