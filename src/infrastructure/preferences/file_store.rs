//! File-backed preference store.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, info};

use crate::domain::errors::StorageError;
use crate::domain::ports::PreferenceStorePort;

const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";
const APP_NAME: &str = "tasklet";
const RECORD_EXTENSION: &str = "json";

/// Stores each record in its own `<key>.json` file under one directory.
pub struct FilePreferenceStore {
    dir: PathBuf,
}

impl FilePreferenceStore {
    /// Creates store in the platform data directory.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if no data directory can be determined.
    pub fn new() -> Result<Self, StorageError> {
        Self::default_dir()
            .map(Self::with_dir)
            .ok_or_else(|| StorageError::unavailable("failed to determine data directory"))
    }

    /// Creates store rooted at `dir`.
    #[must_use]
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Returns the platform data directory.
    #[must_use]
    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Returns the directory holding the records.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file backing `key`.
    #[must_use]
    pub fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(key).with_extension(RECORD_EXTENSION)
    }

    fn ensure_dir(&self, key: &str) -> Result<(), StorageError> {
        if !self.dir.exists() {
            info!(path = %self.dir.display(), "Creating data directory");
            fs::create_dir_all(&self.dir)
                .map_err(|e| StorageError::write_failed(key, e.to_string()))?;
        }
        Ok(())
    }
}

impl PreferenceStorePort for FilePreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.record_path(key);

        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(key, path = %path.display(), "Record read");
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::read_failed(key, e.to_string())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_dir(key)?;
        let path = self.record_path(key);
        let fail = |e: std::io::Error| StorageError::write_failed(key, e.to_string());

        let mut temp_file = tempfile::NamedTempFile::new_in(&self.dir).map_err(fail)?;
        temp_file.write_all(value.as_bytes()).map_err(fail)?;
        temp_file.persist(&path).map_err(|e| fail(e.error))?;

        debug!(key, path = %path.display(), bytes = value.len(), "Record written");
        Ok(())
    }
}
