//! CLI entry point for checker-notification
//!
//! Shows one desktop toast with the given title and message and exits with
//! 0 on success or 1 when the notification could not be displayed.

use clap::Parser;
use checker_notification::{logging, show_notification, BaseDirStrategy, DesktopNotifier};
use std::io;
use std::process::ExitCode;

// Version details from build script, printed by both `-V` and `--version`
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("GIT_COMMIT_HASH"),
    "\nbuilt: ",
    env!("BUILD_TIMESTAMP"),
);

/// Command-line arguments for checker-notification
#[derive(Parser, Debug)]
#[command(
    name = "notification",
    about = "Show a desktop toast notification",
    version = VERSION,
    long_version = VERSION,
    long_about = "Show a desktop toast notification with the given title and message.

An icon.ico placed next to the executable is used as the notification icon.
Optional overrides (app_name, timeout_secs, icon_file, debug) are read from
notification.json in the same directory.

Exit codes: 0 = notification shown, 1 = notification failed, 2 = usage error."
)]
struct Cli {
    /// Notification title
    #[arg(long)]
    title: String,

    /// Notification body message
    #[arg(long)]
    message: String,

    /// Print debug diagnostics to stderr
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    // Missing --title/--message or non-UTF-8 text exits here with clap's usage error
    let cli = Cli::parse();

    logging::init_debug_from_env();
    if cli.debug {
        logging::set_debug(true);
    }

    let shown = show_notification(
        &cli.title,
        &cli.message,
        &BaseDirStrategy::detect(),
        &DesktopNotifier::new(),
        &mut io::stdout(),
        &mut io::stderr(),
    );

    if shown {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
