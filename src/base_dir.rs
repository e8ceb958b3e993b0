//! Base directory resolution
//!
//! The icon and settings files live next to the executable. A binary run out
//! of this crate's own build tree uses the crate's source directory instead,
//! so two strategies exist and [`BaseDirStrategy::detect`] picks one.

use std::env;
use std::path::{self, Path, PathBuf};

use crate::error::{NotificationError, Result};

/// Crate directory recorded at build time; absolute, as cargo provides it
const BUILD_MANIFEST_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// Provider of the directory the helper treats as its home
pub trait ExecutableDir {
    fn base_dir(&self) -> Result<PathBuf>;
}

impl<F> ExecutableDir for F
where
    F: Fn() -> Result<PathBuf>,
{
    fn base_dir(&self) -> Result<PathBuf> {
        self()
    }
}

/// How the base directory is located
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseDirStrategy {
    /// Directory containing the installed executable
    Packaged,
    /// Crate source directory, used when the executable sits in its build tree
    SourceTree(PathBuf),
}

impl BaseDirStrategy {
    /// Pick a strategy for the current process
    ///
    /// Only the running executable's location and the build-time crate
    /// directory are consulted, never the inherited environment.
    pub fn detect() -> Self {
        match executable_dir() {
            Ok(exe_dir) => Self::for_executable(&exe_dir, Path::new(BUILD_MANIFEST_DIR)),
            Err(_) => Self::Packaged,
        }
    }

    fn for_executable(exe_dir: &Path, manifest_dir: &Path) -> Self {
        if manifest_dir.is_absolute() && exe_dir.starts_with(manifest_dir) {
            Self::SourceTree(manifest_dir.to_path_buf())
        } else {
            Self::Packaged
        }
    }
}

impl ExecutableDir for BaseDirStrategy {
    fn base_dir(&self) -> Result<PathBuf> {
        match self {
            Self::Packaged => executable_dir(),
            Self::SourceTree(dir) => Ok(path::absolute(dir)?),
        }
    }
}

/// Absolute directory containing the running executable
pub fn executable_dir() -> Result<PathBuf> {
    let exe_path = path::absolute(env::current_exe()?)?;
    exe_path
        .parent()
        .map(|dir| dir.to_path_buf())
        .ok_or_else(|| {
            NotificationError::BaseDir(format!(
                "executable path has no parent: {}",
                exe_path.display()
            ))
        })
}
