//! Debug logging utilities
//!
//! Simple logging utilities for debugging notification delivery.
//! Informational and error lines are written by the caller to stdout/stderr;
//! these macros only cover the optional `[DEBUG]` trail on stderr.

use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable that turns debug output on
pub const DEBUG_ENV_VAR: &str = "CHECKER_NOTIFICATION_DEBUG";

/// Global debug flag (set from CLI, settings or environment)
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable or disable debug logging
pub fn set_debug(enabled: bool) {
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Initialize debug logging from the environment
///
/// Any non-empty value other than `0` or `false` enables it.
pub fn init_debug_from_env() {
    if let Some(value) = std::env::var_os(DEBUG_ENV_VAR) {
        if env_value_enables(&value.to_string_lossy()) {
            set_debug(true);
        }
    }
}

fn env_value_enables(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}

/// Check if debug logging is enabled
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Log debug message
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            eprintln!("[DEBUG] {}", format_args!($($arg)*));
        }
    };
}

/// Log debug message with context
#[macro_export]
macro_rules! debug_context {
    ($context:expr, $($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            eprintln!("[DEBUG] [{}] {}", $context, format_args!($($arg)*));
        }
    };
}
