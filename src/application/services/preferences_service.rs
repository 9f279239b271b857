//! Task and theme persistence.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::entities::Task;
use crate::domain::errors::StorageError;
use crate::domain::ports::PreferenceStorePort;

/// Record key holding the JSON task array.
pub const TASKS_KEY: &str = "tasks";
/// Record key holding the dark theme flag.
pub const THEME_KEY: &str = "is_dark_theme";

/// Saves and loads the two persisted records.
///
/// None of the operations report failure to the caller. Saves log and drop
/// write errors. Loads fall back to an empty list or `false` when a record
/// is absent, unreadable or malformed.
#[derive(Clone)]
pub struct PreferencesService {
    store: Arc<dyn PreferenceStorePort>,
}

impl PreferencesService {
    /// Creates service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn PreferenceStorePort>) -> Self {
        Self { store }
    }

    /// Replaces the persisted task list with `tasks`.
    pub fn save_tasks(&self, tasks: &[Task]) {
        match self.write_record(TASKS_KEY, tasks) {
            Ok(()) => debug!(count = tasks.len(), "Tasks persisted"),
            Err(e) => warn!(error = %e, count = tasks.len(), "Failed to persist tasks"),
        }
    }

    /// Loads the persisted task list.
    #[must_use]
    pub fn load_tasks(&self) -> Vec<Task> {
        match self.read_record::<Vec<Task>>(TASKS_KEY) {
            Ok(Some(tasks)) => {
                debug!(count = tasks.len(), "Tasks loaded");
                tasks
            }
            Ok(None) => {
                debug!("No saved tasks, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Discarding unreadable task record");
                Vec::new()
            }
        }
    }

    /// Persists the theme flag.
    pub fn save_theme(&self, is_dark: bool) {
        match self.write_record(THEME_KEY, &is_dark) {
            Ok(()) => debug!(is_dark, "Theme persisted"),
            Err(e) => warn!(error = %e, is_dark, "Failed to persist theme"),
        }
    }

    /// Loads the theme flag, `false` when unset.
    #[must_use]
    pub fn load_theme(&self) -> bool {
        match self.read_record::<bool>(THEME_KEY) {
            Ok(flag) => flag.unwrap_or(false),
            Err(e) => {
                warn!(error = %e, "Discarding unreadable theme record");
                false
            }
        }
    }

    fn read_record<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.store.read(key)? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::malformed(key, e.to_string()))
    }

    fn write_record<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)
            .map_err(|e| StorageError::write_failed(key, e.to_string()))?;
        self.store.write(key, &json)
    }
}
