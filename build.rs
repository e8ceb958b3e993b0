use std::process::Command;

/// Run a command and return its trimmed stdout, or "unknown" if it fails
fn command_output(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    let commit_hash = command_output("git", &["rev-parse", "--short", "HEAD"]);
    let build_timestamp = command_output("date", &["+%Y-%m-%d %H:%M:%S"]);

    // Embedded into the binary for `--version`
    println!("cargo:rustc-env=GIT_COMMIT_HASH={}", commit_hash);
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", build_timestamp);
}
