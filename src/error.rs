//! Error types for checker-notification
//!
//! This module defines structured error types using the `thiserror` crate
//! and renders the diagnostic trace printed when a notification fails.

use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt::Write as _;
use std::io;
use thiserror::Error;

/// Main error type for the notification helper
#[derive(Error, Debug)]
pub enum NotificationError {
    /// Error occurred while displaying desktop notification
    #[error("Notification display error: {0}")]
    Display(#[from] notify_rust::error::Error),

    /// Notifier backend failed for a reason of its own
    #[error("Notification backend error: {0}")]
    Backend(String),

    /// Directory of the running executable could not be determined
    #[error("Could not determine executable directory: {0}")]
    BaseDir(String),

    /// I/O error while inspecting the filesystem
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Settings file could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid value supplied by the caller or the settings file
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for the notification helper
pub type Result<T> = std::result::Result<T, NotificationError>;

/// Render the cause chain of `err` followed by a backtrace captured at the call site.
///
/// The backtrace is force-captured so it is present whether or not
/// `RUST_BACKTRACE` is set.
pub fn diagnostic_trace(err: &(dyn Error + 'static)) -> String {
    let mut trace = format!("Error: {err:?}");

    let mut source = err.source();
    if source.is_some() {
        trace.push_str("\n\nCaused by:");
    }
    let mut depth = 0;
    while let Some(cause) = source {
        let _ = write!(trace, "\n    {depth}: {cause}");
        depth += 1;
        source = cause.source();
    }

    let _ = write!(trace, "\n\nStack backtrace:\n{}", Backtrace::force_capture());
    trace
}
