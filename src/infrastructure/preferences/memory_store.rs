//! In-memory preference store.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::domain::errors::StorageError;
use crate::domain::ports::PreferenceStorePort;

/// Keeps records in memory only. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the record under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.records.lock().get(key).cloned()
    }

    /// Seeds a record directly.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.records.lock().insert(key.into(), value.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl PreferenceStorePort for MemoryPreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write() {
        let store = MemoryPreferenceStore::new();
        assert!(store.read("tasks").unwrap().is_none());

        store.write("tasks", "[]").unwrap();
        assert_eq!(store.read("tasks").unwrap().as_deref(), Some("[]"));
        assert!(!store.is_empty());
    }
}
