//! Application configuration.

use crate::domain::keybinding::Action;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

const APP_NAME: &str = "tasklet";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and overridden by CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Keep tasks in memory only.
    #[serde(skip)]
    pub ephemeral: bool,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Enable mouse support.
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Directory holding the task and theme records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Custom keybindings.
    #[serde(default)]
    pub keybindings: HashMap<String, Action>,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Header title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Show toast notifications.
    #[serde(default = "default_true")]
    pub show_toasts: bool,

    /// Toast duration in seconds.
    #[serde(default = "default_toast_duration")]
    pub toast_duration: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            show_toasts: true,
            toast_duration: default_toast_duration(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Primary color in light mode (name or hex code).
    #[serde(default = "default_light_primary")]
    pub light_primary: String,

    /// Primary color in dark mode (name or hex code).
    #[serde(default = "default_dark_primary")]
    pub dark_primary: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            light_primary: default_light_primary(),
            dark_primary: default_dark_primary(),
        }
    }
}

fn default_title() -> String {
    "To Do App".to_string()
}

fn default_light_primary() -> String {
    "#6650a4".to_string()
}

fn default_dark_primary() -> String {
    "#d0bcff".to_string()
}

fn default_true() -> bool {
    true
}

fn default_toast_duration() -> u64 {
    2
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(mouse) = args.mouse {
            self.mouse = mouse;
        }
        if let Some(data_dir) = args.data_dir {
            self.data_dir = Some(data_dir);
        }
        if let Some(toast_duration) = args.toast_duration {
            self.ui.toast_duration = toast_duration;
        }
        if let Some(show_toasts) = args.show_toasts {
            self.ui.show_toasts = show_toasts;
        }
        if args.ephemeral {
            self.ephemeral = true;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("tasklet.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path
            .clone()
            .or_else(|| self.data_dir.as_ref().map(|dir| dir.join("tasklet.log")))
            .or_else(Self::default_log_path)
    }

    /// Returns toast duration.
    #[must_use]
    pub const fn toast_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.ui.toast_duration)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            ephemeral: false,
            log_level: LogLevel::Info,
            mouse: true,
            data_dir: None,
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
            keybindings: HashMap::new(),
        }
    }
}
