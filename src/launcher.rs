//! The launch sequence: validate, resolve prompt, prepare the output
//! directory, and run the agent from inside it.
//!
//! ```text
//! Validating -> ResolvingPrompt -> PreparingDirectory -> Invoking -> Restoring -> Done
//! ```
//!
//! Validation and preparation failures are returned as errors before anything
//! is spawned. Once invocation starts, every failure is reported to the
//! console and turned into `Ok(false)`; the working directory guard is dropped
//! on every path out of [`invoke`].

use crate::agent::{AgentCommand, execute_agent};
use crate::config::Config;
use crate::error::{LaunchError, Result};
use crate::fs::atomic_write_file;
use crate::models;
use crate::prompt::{resolve_prompt, rewrite_for_parent_dir};
use crate::workdir::WorkdirGuard;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// One launcher invocation.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Folder holding the data file and images.
    pub folder: PathBuf,
    /// Model identifier, or `auto`.
    pub model: String,
    /// Prepare everything but do not spawn the agent.
    pub dry_run: bool,
}

impl RunRequest {
    pub fn new(folder: impl Into<PathBuf>, model: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            model: model.into(),
            dry_run: false,
        }
    }
}

/// Run the agent for `request`.
///
/// # Returns
///
/// * `Ok(true)` - The agent exited with status 0 (or the dry run completed)
/// * `Ok(false)` - The agent failed, was interrupted, or could not be started
/// * `Err(LaunchError::Configuration)` - Folder or data file missing
/// * `Err(LaunchError::UserError)` - Prompt or output directory could not be prepared
pub fn run(config: &Config, request: &RunRequest) -> Result<bool> {
    validate_folder(config, &request.folder)?;

    let prompt = resolve_prompt(Path::new(&config.prompt_file))?;
    println!("{}", prompt.summary());

    let cursor_dir = request
        .folder
        .join(config.output_dir_name(&request.model));
    std::fs::create_dir_all(&cursor_dir)
        .map_err(|e| LaunchError::io("create directory", &cursor_dir, e))?;

    let rewritten = rewrite_for_parent_dir(&prompt.text);
    let prompt_path = cursor_dir.join(&config.prompt_output);
    atomic_write_file(&prompt_path, &rewritten)?;
    println!("✓ Saved modified prompt to {}", prompt_path.display());

    let command = AgentCommand::build(config, &request.model)?;
    tracing::debug!(command = %command.display(), dir = %cursor_dir.display(), "prepared agent run");

    if request.dry_run {
        println!("\nDry run: would execute in {}:", cursor_dir.display());
        println!("  {}", command.display());
        return Ok(true);
    }

    match invoke(config, &command, &request.model, &cursor_dir, &rewritten) {
        Ok(()) => {
            if let Err(e) = report_success(&mut io::stdout().lock(), &cursor_dir) {
                tracing::warn!(error = %e, "failed to write success report");
            }
            Ok(true)
        }
        Err(err) => {
            if let Err(e) = report_failure(&mut io::stdout().lock(), &err) {
                tracing::warn!(error = %e, "failed to write failure report");
            }
            Ok(false)
        }
    }
}

/// Check that `folder` is a directory holding the configured data file.
///
/// The data file is checked for existence only; it is never parsed.
pub fn validate_folder(config: &Config, folder: &Path) -> Result<()> {
    if !folder.exists() {
        return Err(LaunchError::missing_folder(folder));
    }
    if !folder.is_dir() {
        return Err(LaunchError::Configuration(format!(
            "Not a directory: {}",
            folder.display()
        )));
    }
    if !folder.join(&config.data_file).exists() {
        return Err(LaunchError::missing_data_file(&config.data_file, folder));
    }
    Ok(())
}

/// Run the agent from inside `cursor_dir`.
fn invoke(
    config: &Config,
    command: &AgentCommand,
    model: &str,
    cursor_dir: &Path,
    prompt: &str,
) -> Result<()> {
    let _workdir = WorkdirGuard::enter(cursor_dir)?;

    println!("\n✓ Changed directory to: {}", cursor_dir.display());
    if models::is_auto(model) {
        println!("Running {} (auto model selection)...\n", command.program);
    } else {
        println!("Running {} with model: {}...\n", command.program, model);
    }
    println!("{}", models::rule());

    let result = execute_agent(command, prompt, &config.environment)?;

    println!("{}", models::rule());

    if result.is_success() {
        Ok(())
    } else {
        Err(LaunchError::SubprocessFailure {
            code: result.exit_code,
        })
    }
}

fn report_success<W: Write>(out: &mut W, cursor_dir: &Path) -> io::Result<()> {
    writeln!(out, "\n✓ Cursor-agent completed successfully")?;
    writeln!(out, "✓ Output folder: {}", cursor_dir.display())
}

fn report_failure<W: Write>(out: &mut W, err: &LaunchError) -> io::Result<()> {
    match err {
        LaunchError::Interrupted => {
            tracing::warn!("agent interrupted by user");
            writeln!(out, "\n\n⚠ {}", err)
        }
        _ => {
            tracing::error!(error = %err, "agent run failed");
            writeln!(out, "\n✗ {}", err)
        }
    }
}

#[cfg(test)]
mod tests;
