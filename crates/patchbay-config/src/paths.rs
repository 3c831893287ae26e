//! Platform-specific configuration paths.
//!
//! - Linux: `~/.config/patchbay/panel.toml`
//! - macOS: `~/Library/Application Support/patchbay/panel.toml`
//! - Windows: `%APPDATA%\patchbay\panel.toml`

use std::path::PathBuf;

/// Application name used for directory paths.
const APP_NAME: &str = "patchbay";

/// File name of the panel configuration.
const CONFIG_FILE: &str = "panel.toml";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the default location of the panel configuration file.
pub fn default_config_path() -> PathBuf {
    user_config_dir().join(CONFIG_FILE)
}

/// Ensure the user config directory exists.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_user_config_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_config_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}
