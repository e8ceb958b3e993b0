//! Core notification logic for checker-notification
//!
//! This crate shows a single desktop toast with a caller-supplied title and
//! message, using an `icon.ico` that sits next to the executable when one
//! exists. [`show_notification`] performs the whole sequence and reports
//! success as a boolean the binary turns into an exit code.

mod base_dir;
mod config;
mod error;
pub mod logging;
mod notifier;
mod request;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub use base_dir::{executable_dir, BaseDirStrategy, ExecutableDir};
pub use config::{
    get_settings_path, load_settings_from_path, NotifierSettings, ICON_FILE_NAME,
    SETTINGS_FILE_NAME,
};
pub use error::{diagnostic_trace, NotificationError, Result};
pub use notifier::{DesktopNotifier, Notifier};
pub use request::{NotificationRequest, APP_NAME, TIMEOUT_SECS};

/// Show one notification and log the outcome
///
/// Informational lines go to `out`, error summaries and traces to `err`.
/// No failure propagates: it is logged and `false` is returned. A failed
/// write to `out` counts as a failure like any other.
pub fn show_notification<D, N>(
    title: &str,
    message: &str,
    base_dir: &D,
    notifier: &N,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> bool
where
    D: ExecutableDir + ?Sized,
    N: Notifier + ?Sized,
{
    match notify_and_log(title, message, base_dir, notifier, out, err) {
        Ok(()) => true,
        Err(e) => {
            report_failure(err, &e);
            false
        }
    }
}

fn notify_and_log<D, N>(
    title: &str,
    message: &str,
    base_dir: &D,
    notifier: &N,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()>
where
    D: ExecutableDir + ?Sized,
    N: Notifier + ?Sized,
{
    let base_dir = base_dir.base_dir()?;
    debug_context!("show_notification", "Base directory: {}", base_dir.display());

    let settings = load_settings(&base_dir, err);
    if settings.debug {
        logging::set_debug(true);
    }

    let icon_path = match settings.resolve_icon_path(&base_dir) {
        Ok(candidate) => locate_icon(&candidate, &settings.icon_file, out)?,
        Err(e) => {
            warn(err, format_args!("{}. Using default icon.", e));
            None
        }
    };

    let request = NotificationRequest::new(title, message)
        .with_app_name(settings.app_name)
        .with_timeout_secs(settings.timeout_secs)
        .with_icon(icon_path);

    notifier.notify(request)?;

    writeln!(out, "Notification shown: title='{}'", title)?;
    out.flush()?;
    Ok(())
}

/// Load `notification.json`, falling back to defaults when it is unusable
fn load_settings(base_dir: &Path, err: &mut dyn Write) -> NotifierSettings {
    let path = get_settings_path(base_dir);
    match load_settings_from_path(&path) {
        Ok(settings) => {
            debug_context!("load_settings", "Settings: {:?}", settings);
            settings
        }
        Err(e) => {
            warn(err, format_args!("{}. Using default settings.", e));
            NotifierSettings::default()
        }
    }
}

/// Return the icon path when the file exists, logging either way
fn locate_icon(
    candidate: &Path,
    icon_file: &str,
    out: &mut dyn Write,
) -> io::Result<Option<PathBuf>> {
    if candidate.exists() {
        writeln!(out, "Using icon: {}", candidate.display())?;
        Ok(Some(candidate.to_path_buf()))
    } else {
        writeln!(
            out,
            "Icon file '{}' not found: {}. Using default icon.",
            icon_file,
            candidate.display()
        )?;
        Ok(None)
    }
}

// Writes to `err` are best effort: stderr is where failures are reported,
// so a failure to write there has nowhere else to go.

fn warn(err: &mut dyn Write, args: std::fmt::Arguments<'_>) {
    let _ = writeln!(err, "Warning: {}", args);
}

fn report_failure(err: &mut dyn Write, e: &NotificationError) {
    let _ = writeln!(err, "Error while showing notification: {}", e);
    let _ = writeln!(err, "{}", diagnostic_trace(e));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    /// Notifier that records every request and optionally fails
    struct MockNotifier {
        calls: RefCell<Vec<NotificationRequest>>,
        failure: Option<String>,
    }

    impl MockNotifier {
        fn succeeding() -> Self {
            Self { calls: RefCell::new(Vec::new()), failure: None }
        }

        fn failing(reason: &str) -> Self {
            Self { calls: RefCell::new(Vec::new()), failure: Some(reason.to_string()) }
        }
    }

    impl Notifier for MockNotifier {
        fn notify(&self, request: NotificationRequest) -> Result<()> {
            self.calls.borrow_mut().push(request);
            match &self.failure {
                Some(reason) => Err(NotificationError::Backend(reason.clone())),
                None => Ok(()),
            }
        }
    }

    struct Output {
        ok: bool,
        stdout: String,
        stderr: String,
    }

    fn run(title: &str, message: &str, dir: &Path, notifier: &MockNotifier) -> Output {
        let dir = dir.to_path_buf();
        let provider = move || -> Result<PathBuf> { Ok(dir.clone()) };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let ok = show_notification(title, message, &provider, notifier, &mut out, &mut err);
        Output {
            ok,
            stdout: String::from_utf8(out).unwrap(),
            stderr: String::from_utf8(err).unwrap(),
        }
    }

    #[test]
    fn test_success_without_icon() {
        let temp_dir = TempDir::new().unwrap();
        let notifier = MockNotifier::succeeding();

        let output = run("Build Done", "All tests passed", temp_dir.path(), &notifier);

        assert!(output.ok);
        let calls = notifier.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            NotificationRequest {
                title: "Build Done".to_string(),
                message: "All tests passed".to_string(),
                app_name: APP_NAME.to_string(),
                timeout_secs: 10,
                icon_path: None,
            }
        );
        assert!(output.stdout.contains("Icon file 'icon.ico' not found"));
        assert!(output.stdout.contains(&temp_dir.path().join("icon.ico").display().to_string()));
        assert!(output.stdout.contains("Notification shown: title='Build Done'"));
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn test_icon_is_attached_when_present() {
        let temp_dir = TempDir::new().unwrap();
        let icon = temp_dir.path().join(ICON_FILE_NAME);
        fs::write(&icon, b"not really an icon").unwrap();
        let notifier = MockNotifier::succeeding();

        let output = run("Build Done", "All tests passed", temp_dir.path(), &notifier);

        assert!(output.ok);
        let calls = notifier.calls.borrow();
        assert_eq!(calls[0].icon_path.as_deref(), Some(icon.as_path()));
        assert!(calls[0].icon_path.as_ref().unwrap().is_absolute());
        assert!(output.stdout.contains(&format!("Using icon: {}", icon.display())));
    }

    #[test]
    fn test_failure_is_logged_with_trace() {
        let temp_dir = TempDir::new().unwrap();
        let notifier = MockNotifier::failing("backend unavailable");

        let output = run("Build Done", "All tests passed", temp_dir.path(), &notifier);

        assert!(!output.ok);
        assert_eq!(notifier.calls.borrow().len(), 1);
        assert!(output.stderr.contains("Error while showing notification"));
        assert!(output.stderr.contains("backend unavailable"));
        assert!(output.stderr.contains("Stack backtrace:"));
        assert!(!output.stdout.contains("Notification shown"));
    }

    #[test]
    fn test_empty_title_and_message_are_passed_through() {
        let temp_dir = TempDir::new().unwrap();
        let notifier = MockNotifier::succeeding();

        let output = run("", "", temp_dir.path(), &notifier);

        assert!(output.ok);
        let calls = notifier.calls.borrow();
        assert_eq!(calls[0].title, "");
        assert_eq!(calls[0].message, "");
    }

    #[test]
    fn test_base_dir_failure_skips_notifier() {
        let notifier = MockNotifier::succeeding();
        let provider =
            || -> Result<PathBuf> { Err(NotificationError::BaseDir("no parent".to_string())) };
        let mut out = Vec::new();
        let mut err = Vec::new();

        let ok = show_notification("t", "m", &provider, &notifier, &mut out, &mut err);

        assert!(!ok);
        assert!(notifier.calls.borrow().is_empty());
        assert!(String::from_utf8(err).unwrap().contains("no parent"));
    }

    #[test]
    fn test_settings_override_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            get_settings_path(temp_dir.path()),
            r#"{ "app_name": "Nightly", "timeout_secs": 4, "icon_file": "nightly.ico" }"#,
        )
        .unwrap();
        let icon = temp_dir.path().join("nightly.ico");
        fs::write(&icon, b"icon").unwrap();
        let notifier = MockNotifier::succeeding();

        let output = run("Build Done", "All tests passed", temp_dir.path(), &notifier);

        assert!(output.ok);
        let calls = notifier.calls.borrow();
        assert_eq!(calls[0].app_name, "Nightly");
        assert_eq!(calls[0].timeout_secs, 4);
        assert_eq!(calls[0].icon_path.as_deref(), Some(icon.as_path()));
    }

    #[test]
    fn test_malformed_settings_fall_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(get_settings_path(temp_dir.path()), "{ broken").unwrap();
        let notifier = MockNotifier::succeeding();

        let output = run("Build Done", "All tests passed", temp_dir.path(), &notifier);

        assert!(output.ok);
        assert!(output.stderr.contains("Warning: Configuration error"));
        let calls = notifier.calls.borrow();
        assert_eq!(calls[0].app_name, APP_NAME);
        assert_eq!(calls[0].timeout_secs, TIMEOUT_SECS);
    }

    /// Writer that rejects any write containing `reject`
    struct RejectingWriter {
        reject: &'static str,
        written: Vec<u8>,
    }

    impl Write for RejectingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if String::from_utf8_lossy(buf).contains(self.reject) {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_success_line_is_a_failure() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_path_buf();
        let provider = move || -> Result<PathBuf> { Ok(dir.clone()) };
        let notifier = MockNotifier::succeeding();
        let mut out = RejectingWriter { reject: "Notification shown", written: Vec::new() };
        let mut err = Vec::new();

        let ok = show_notification("Build Done", "m", &provider, &notifier, &mut out, &mut err);

        assert!(!ok);
        assert_eq!(notifier.calls.borrow().len(), 1);
        let stderr = String::from_utf8(err).unwrap();
        assert!(stderr.contains("Error while showing notification"));
        assert!(stderr.contains("stdout closed"));
    }

    #[test]
    fn test_failed_icon_line_skips_notifier() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_path_buf();
        let provider = move || -> Result<PathBuf> { Ok(dir.clone()) };
        let notifier = MockNotifier::succeeding();
        let mut out = RejectingWriter { reject: "Icon file", written: Vec::new() };
        let mut err = Vec::new();

        let ok = show_notification("Build Done", "m", &provider, &notifier, &mut out, &mut err);

        assert!(!ok);
        assert!(notifier.calls.borrow().is_empty());
        assert!(out.written.is_empty());
    }
}
