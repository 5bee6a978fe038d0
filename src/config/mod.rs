//! Configuration management for Yield Architect.

mod settings;

pub use settings::{
    Config, KeyBindings, NotificationConfig, SimulationConfig, ThemeConfig, UiConfig,
};

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Prefix for environment variable overrides, e.g.
/// `YIELD_ARCHITECT__SIMULATION__WALLET_CONNECT_LATENCY_MS=500`.
pub const ENV_PREFIX: &str = "YIELD_ARCHITECT";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "yield-architect", "yield-architect")
        .ok_or_else(|| Error::config("Could not determine project directories"))
}

/// Get the configuration directory path.
pub fn config_dir() -> Result<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the log directory path.
pub fn log_dir() -> Result<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("logs"))
}

/// Default location of `config.toml`.
pub fn default_config_path() -> PathBuf {
    config_dir()
        .map(|p| p.join("config.toml"))
        .unwrap_or_else(|_| PathBuf::from("config.toml"))
}
