//! Preference store port definition.

use crate::domain::errors::StorageError;

/// Port for durable string-keyed records.
///
/// Each key is an independent record. Writing a key replaces its prior value.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStorePort: Send + Sync {
    /// Reads the record stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing was ever written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the record stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
