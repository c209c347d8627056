//! Locations of Claude's data and squirrel's own config.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Overrides the Claude data directory (default `~/.claude`).
pub const CLAUDE_DIR_ENV: &str = "SQUIRREL_CLAUDE_DIR";

/// Overrides the config file (default `~/.config/squirrel/config.json`).
pub const CONFIG_ENV: &str = "SQUIRREL_CONFIG";

/// Read a path from the environment, ignoring empty values.
fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Could not find home directory")
}

/// Claude's data directory.
pub fn claude_dir() -> Result<PathBuf> {
    if let Some(dir) = env_path(CLAUDE_DIR_ENV) {
        return Ok(dir);
    }
    Ok(home_dir()?.join(".claude"))
}

/// Path of the acknowledgement store.
pub fn default_config_path() -> Result<PathBuf> {
    if let Some(path) = env_path(CONFIG_ENV) {
        return Ok(path);
    }
    Ok(home_dir()?
        .join(".config")
        .join("squirrel")
        .join("config.json"))
}
