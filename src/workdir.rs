//! Scoped change of the process working directory.
//!
//! The working directory is process-global. [`WorkdirGuard`] records it,
//! switches to the requested directory, and switches back when dropped, so
//! every exit path (return, `?`, panic unwind) restores it.

use crate::error::{LaunchError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Restores the previous working directory on drop.
#[derive(Debug)]
pub struct WorkdirGuard {
    original: PathBuf,
}

impl WorkdirGuard {
    /// Record the current directory and change into `dir`.
    ///
    /// Nothing is changed if either step fails.
    pub fn enter(dir: &Path) -> Result<Self> {
        let original = env::current_dir().map_err(|e| {
            LaunchError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        env::set_current_dir(dir).map_err(|e| LaunchError::io("change directory to", dir, e))?;
        tracing::debug!(from = %original.display(), to = %dir.display(), "entered directory");

        Ok(Self { original })
    }
}

impl Drop for WorkdirGuard {
    fn drop(&mut self) {
        match env::set_current_dir(&self.original) {
            Ok(()) => tracing::debug!(to = %self.original.display(), "restored directory"),
            Err(e) => {
                tracing::error!(error = %e, "failed to restore working directory");
                eprintln!(
                    "✗ Failed to restore working directory to {}: {}",
                    self.original.display(),
                    e
                );
            }
        }
    }
}
