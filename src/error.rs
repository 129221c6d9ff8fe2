//! Error types for the run-cursor launcher.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::Path;
use thiserror::Error;

/// Main error type for launcher operations.
///
/// `Configuration` and `UserError` abort a run before the agent is spawned.
/// The remaining variants describe how an invocation failed; the launcher
/// reports them and turns them into an unsuccessful run instead of
/// propagating them.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The target folder or its required data file is missing.
    #[error("{0}")]
    Configuration(String),

    /// Filesystem or config problem while preparing the run.
    #[error("{0}")]
    UserError(String),

    /// The agent ran but exited with a non-zero status.
    #[error("Cursor-agent exited with code: {}", format_code(.code))]
    SubprocessFailure {
        /// Exit code, `None` when the child was terminated by a signal.
        code: Option<i32>,
    },

    /// The user interrupted the run while waiting on the agent.
    #[error("Cursor-agent interrupted by user")]
    Interrupted,

    /// Spawning or waiting on the agent failed.
    #[error("Error running {program}: {message}")]
    Invocation { program: String, message: String },
}

fn format_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}

impl LaunchError {
    /// Build the configuration error for a missing target folder.
    pub fn missing_folder(folder: &Path) -> Self {
        LaunchError::Configuration(format!("Folder does not exist: {}", folder.display()))
    }

    /// Build the configuration error for a folder without its data file.
    pub fn missing_data_file(data_file: &str, folder: &Path) -> Self {
        LaunchError::Configuration(format!("{} not found in {}", data_file, folder.display()))
    }

    /// Wrap an I/O failure on `path` as a user error.
    pub fn io(action: &str, path: &Path, err: std::io::Error) -> Self {
        LaunchError::UserError(format!("failed to {} '{}': {}", action, path.display(), err))
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::Configuration(_)
            | LaunchError::UserError(_)
            | LaunchError::SubprocessFailure { .. }
            | LaunchError::Interrupted
            | LaunchError::Invocation { .. } => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LaunchError>;
