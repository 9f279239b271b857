use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::app_config::AppConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no configuration directory available on this platform")]
    ConfigDirNotFound,
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode default config: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Finds, creates and reads `config.toml`.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Uses the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigDirNotFound` if the platform has none.
    pub fn new() -> Result<Self, ConfigError> {
        AppConfig::default_config_dir()
            .map(Self::with_dir)
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    #[must_use]
    pub fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Path of the file `load_config` reads.
    #[must_use]
    pub fn config_path(&self, path_override: Option<&Path>) -> PathBuf {
        path_override.map_or_else(|| self.config_dir.join(CONFIG_FILE_NAME), Path::to_path_buf)
    }

    /// Loads the configuration, writing defaults when the file is absent.
    ///
    /// A file that fails to parse is left untouched and defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the defaults cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = self.config_path(path_override);

        if !path.exists() {
            info!(path = %path.display(), "No config file, writing defaults");
            let config = AppConfig::default();
            write_atomic(&path, &toml::to_string_pretty(&config)?)?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)?;
        toml::from_str::<AppConfig>(&content).map_or_else(
            |e| {
                warn!(path = %path.display(), error = %e, "Malformed config, using defaults");
                Ok(AppConfig::default())
            },
            |config| {
                debug!(path = %path.display(), "Config loaded");
                Ok(config)
            },
        )
    }
}

/// Replaces `path` via a temp file in the same directory.
fn write_atomic(path: &Path, content: &str) -> Result<(), ConfigError> {
    let parent = path
        .parent()
        .ok_or_else(|| std::io::Error::other("config path has no parent"))?;
    fs::create_dir_all(parent)?;

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_writes_defaults_in_nested_dir() {
        let dir = tempdir().unwrap();
        let config_dir = dir.path().join("nested").join("tasklet");
        let manager = StorageManager::with_dir(config_dir.clone());

        let config = manager.load_config(None).unwrap();

        assert!(config.mouse);
        let written = fs::read_to_string(config_dir.join(CONFIG_FILE_NAME)).unwrap();
        let reread: AppConfig = toml::from_str(&written).unwrap();
        assert_eq!(reread.ui.title, "To Do App");
    }

    #[test]
    fn test_malformed_config_is_kept_and_defaults_used() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let path = manager.config_path(None);
        fs::write(&path, "mouse = [").unwrap();

        let config = manager.load_config(None).unwrap();

        assert!(config.mouse);
        assert_eq!(fs::read_to_string(&path).unwrap(), "mouse = [");
    }

    #[test]
    fn test_override_path_wins() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("unused"));
        let custom = dir.path().join("custom.toml");
        fs::write(&custom, "mouse = false\n[ui]\ntitle = \"Chores\"\n").unwrap();

        let config = manager.load_config(Some(&custom)).unwrap();

        assert!(!config.mouse);
        assert_eq!(config.ui.title, "Chores");
        assert!(!dir.path().join("unused").exists());
    }
}
