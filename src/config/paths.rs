//! XDG config locations.

use crate::error::IndexError;
use std::path::PathBuf;

/// `$XDG_CONFIG_HOME`, falling back to `$HOME/.config`.
pub fn config_home() -> Result<PathBuf, IndexError> {
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg_config_home.is_empty() {
            return Ok(PathBuf::from(xdg_config_home));
        }
    }

    let home = std::env::var("HOME").map_err(|_| {
        IndexError::Config("Could not determine XDG config home directory (HOME not set)".to_string())
    })?;

    Ok(PathBuf::from(home).join(".config"))
}

/// Global config file: `<config home>/coursetree/config.toml`.
pub fn global_config_path() -> Result<PathBuf, IndexError> {
    Ok(config_home()?.join("coursetree").join("config.toml"))
}
