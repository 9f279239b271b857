use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "tasklet",
    version,
    about = "A small, single-screen terminal to-do list",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding saved tasks and theme.
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Show toast notifications.
    #[arg(long)]
    pub show_toasts: Option<bool>,

    /// Toast duration in seconds.
    #[arg(long)]
    pub toast_duration: Option<u64>,

    /// Keep tasks in memory only; nothing is saved.
    #[arg(long)]
    pub ephemeral: bool,
}
