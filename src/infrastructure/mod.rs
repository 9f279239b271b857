//! Infrastructure layer with storage, configuration and id adapters.

/// Application configuration.
pub mod config;
/// Task id sources.
pub mod ids;
/// Preference store adapters.
pub mod preferences;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use ids::RandomIdGenerator;
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore};
