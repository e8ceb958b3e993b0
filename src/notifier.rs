//! Notifier abstraction and the desktop implementation
//!
//! [`DesktopNotifier`] displays toasts through notify-rust. Tests and other
//! front ends can supply their own [`Notifier`].

use notify_rust::{Notification, Timeout};

use crate::error::Result;
use crate::request::NotificationRequest;

/// Something that can put a notification on screen
pub trait Notifier {
    /// Display `request`, returning once the platform has accepted it
    fn notify(&self, request: NotificationRequest) -> Result<()>;
}

/// Platform toast notifier backed by notify-rust
#[derive(Debug, Default)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    pub fn new() -> Self {
        Self
    }

    /// Map a request onto a notify-rust notification
    fn build_notification(request: &NotificationRequest) -> Notification {
        let mut notification = Notification::new();
        notification.summary(&request.title);
        notification.body(&request.message);
        notification.appname(&request.app_name);
        notification.timeout(Timeout::Milliseconds(request.timeout_ms()));

        if let Some(icon_path) = &request.icon_path {
            notification.icon(&icon_path.to_string_lossy());
        }

        notification
    }

    /// Register a bundle for the app name so macOS attributes the toast to it
    #[cfg(target_os = "macos")]
    fn register_application(app_name: &str) {
        let bundle = mac_notification_sys::get_bundle_identifier_or_default(app_name);
        if let Err(e) = mac_notification_sys::set_application(&bundle) {
            crate::debug_context!("DesktopNotifier", "Could not set application bundle {}: {}", bundle, e);
        }
    }

    #[cfg(not(target_os = "macos"))]
    fn register_application(_app_name: &str) {}
}

impl Notifier for DesktopNotifier {
    fn notify(&self, request: NotificationRequest) -> Result<()> {
        crate::debug_context!("DesktopNotifier", "Request: {:?}", request);
        Self::register_application(&request.app_name);

        let notification = Self::build_notification(&request);

        crate::debug_log!("Displaying notification...");
        notification.show()?;
        crate::debug_log!("Notification displayed successfully");

        Ok(())
    }
}
