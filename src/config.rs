//! Optional settings file
//!
//! This module loads `notification.json` from the base directory. Every field
//! is optional; a missing file yields the built-in defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NotificationError, Result};
use crate::request::{APP_NAME, TIMEOUT_SECS};

/// Settings file name, looked up next to the executable
pub const SETTINGS_FILE_NAME: &str = "notification.json";

/// Icon file name, looked up next to the executable
pub const ICON_FILE_NAME: &str = "icon.ico";

/// Overrides for the notification defaults
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotifierSettings {
    /// Application name reported to the platform
    pub app_name: String,

    /// Display-hint timeout in seconds
    pub timeout_secs: u32,

    /// Icon file name or path; relative paths resolve against the base directory
    pub icon_file: String,

    /// Print `[DEBUG]` lines to stderr
    pub debug: bool,
}

impl Default for NotifierSettings {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            timeout_secs: TIMEOUT_SECS,
            icon_file: ICON_FILE_NAME.to_string(),
            debug: false,
        }
    }
}

impl NotifierSettings {
    /// Candidate icon path for this base directory
    ///
    /// `~` and environment variables in `icon_file` are expanded. An absolute
    /// result replaces `base_dir` entirely.
    pub fn resolve_icon_path(&self, base_dir: &Path) -> Result<PathBuf> {
        let expanded = shellexpand::full(&self.icon_file).map_err(|e| {
            NotificationError::InvalidInput(format!("Failed to expand icon path: {}", e))
        })?;
        Ok(base_dir.join(&*expanded))
    }
}

/// Path of the settings file inside `base_dir`
pub fn get_settings_path(base_dir: &Path) -> PathBuf {
    base_dir.join(SETTINGS_FILE_NAME)
}

/// Load settings from a specific path
/// If the file doesn't exist, returns the defaults
pub fn load_settings_from_path(path: &Path) -> Result<NotifierSettings> {
    if !path.exists() {
        return Ok(NotifierSettings::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        NotificationError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        NotificationError::ConfigError(format!("Failed to parse {}: {}", path.display(), e))
    })
}
