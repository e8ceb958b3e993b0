//! Notification request passed to a [`Notifier`](crate::Notifier)

use std::path::PathBuf;

/// Application label shown by the platform notifier
pub const APP_NAME: &str = "Checker Notification";

/// Display-hint timeout handed to the platform, in seconds
pub const TIMEOUT_SECS: u32 = 10;

/// Everything needed to display one toast notification
///
/// Built once per run and consumed by value by the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Notification title text
    pub title: String,
    /// Notification body text
    pub message: String,
    /// Application name reported to the platform
    pub app_name: String,
    /// How long the platform should keep the toast on screen
    pub timeout_secs: u32,
    /// Absolute path of the icon; `None` falls back to the platform default
    pub icon_path: Option<PathBuf>,
}

impl NotificationRequest {
    /// Create a request with the default app name and timeout and no icon
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            app_name: APP_NAME.to_string(),
            timeout_secs: TIMEOUT_SECS,
            icon_path: None,
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u32) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_icon(mut self, icon_path: Option<PathBuf>) -> Self {
        self.icon_path = icon_path;
        self
    }

    /// Timeout in milliseconds, as most platform APIs expect it
    pub fn timeout_ms(&self) -> u32 {
        self.timeout_secs.saturating_mul(1000)
    }
}
