//! Agent subprocess executor.
//!
//! Spawns the agent in the current working directory with the prompt on
//! stdin and the launcher's stdout/stderr, then waits for it to exit.

use super::interrupt::InterruptGuard;
use crate::agent::AgentCommand;
use crate::error::{LaunchError, Result};
use std::collections::HashMap;
use std::io::{self, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How long the agent may keep running after Ctrl-C before it is killed.
const INTERRUPT_GRACE: Duration = Duration::from_millis(250);
const GRACE_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Result of executing the agent.
#[derive(Debug, Clone)]
pub struct AgentResult {
    /// Exit code of the process (None if terminated by a signal).
    pub exit_code: Option<i32>,
    /// Duration of execution.
    pub duration: Duration,
    /// The command that was executed (for logging).
    pub command: String,
}

impl AgentResult {
    /// Check if the agent execution was successful.
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Run `command` with `prompt` on stdin and wait for it to exit.
///
/// # Returns
///
/// * `Ok(AgentResult)` - The agent ran to completion (with any exit code)
/// * `Err(LaunchError::Interrupted)` - Ctrl-C arrived while waiting
/// * `Err(LaunchError::Invocation)` - The agent could not be spawned or waited on
pub fn execute_agent(
    command: &AgentCommand,
    prompt: &str,
    environment: &HashMap<String, String>,
) -> Result<AgentResult> {
    let invocation_error = |message: String| LaunchError::Invocation {
        program: command.program.clone(),
        message,
    };

    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args)
        .envs(environment)
        .stdin(Stdio::piped())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let interrupt = InterruptGuard::install()?;

    let start_time = Instant::now();
    let mut child = cmd.spawn().map_err(|e| {
        invocation_error(format!(
            "{}\nFix: ensure '{}' is installed and in PATH.",
            e, command.program
        ))
    })?;
    tracing::debug!(pid = child.id(), command = %command.display(), "spawned agent");

    let writer = child
        .stdin
        .take()
        .map(|stdin| spawn_prompt_writer(stdin, prompt.to_string()));

    let waited = wait_for_exit(&mut child, &interrupt);
    finish_prompt_writer(writer);
    let exit_code = waited.map_err(invocation_error)?;

    if interrupt.triggered() {
        return Err(LaunchError::Interrupted);
    }

    let duration = start_time.elapsed();
    tracing::debug!(?exit_code, ?duration, "agent exited");

    Ok(AgentResult {
        exit_code,
        duration,
        command: command.display(),
    })
}

/// Stream the prompt from a separate thread so a child that never reads
/// stdin cannot block the launcher on a full pipe.
fn spawn_prompt_writer(mut stdin: ChildStdin, prompt: String) -> JoinHandle<io::Result<()>> {
    std::thread::spawn(move || {
        stdin.write_all(prompt.as_bytes())?;
        stdin.flush()
        // stdin drops here, closing the pipe so the child sees EOF
    })
}

fn finish_prompt_writer(writer: Option<JoinHandle<io::Result<()>>>) {
    let Some(writer) = writer else { return };
    match writer.join() {
        Ok(Ok(())) => {}
        // The child exited or closed stdin before reading the whole prompt.
        Ok(Err(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("agent closed stdin before the prompt was fully written");
        }
        Ok(Err(e)) => tracing::warn!(error = %e, "failed to write prompt to agent stdin"),
        Err(_) => tracing::warn!("prompt writer thread panicked"),
    }
}

/// Wait for the child, killing it if Ctrl-C arrives first.
///
/// Returns the exit code (None if terminated by a signal).
fn wait_for_exit(
    child: &mut Child,
    interrupt: &InterruptGuard,
) -> std::result::Result<Option<i32>, String> {
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status.code()),
            Ok(None) => {
                if interrupt.triggered() {
                    tracing::debug!("interrupt received, stopping agent");
                    return Ok(stop_after_interrupt(child));
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Err(e) => {
                kill_process(child);
                return Err(format!("failed to check process status: {}", e));
            }
        }
    }
}

/// Give the agent a short grace period to exit on the SIGINT it received
/// from the terminal, then kill it.
fn stop_after_interrupt(child: &mut Child) -> Option<i32> {
    let deadline = Instant::now() + INTERRUPT_GRACE;
    while Instant::now() < deadline {
        match child.try_wait() {
            Ok(Some(status)) => return status.code(),
            Ok(None) => std::thread::sleep(GRACE_POLL_INTERVAL),
            Err(_) => break,
        }
    }
    tracing::debug!("agent still running after grace period, killing");
    kill_process(child);
    None
}

/// Kill a process and wait for it to terminate.
fn kill_process(child: &mut Child) {
    // On Unix this is SIGKILL; on Windows it is TerminateProcess.
    let _ = child.kill();
    let _ = child.wait();
}
