//! Scoped Ctrl-C handling while waiting on the agent.
//!
//! While an [`InterruptGuard`] is alive, SIGINT sets a flag instead of
//! terminating the launcher. The child shares the terminal's process group and
//! receives the same signal, so the executor only has to notice the flag, reap
//! the child, and report the interruption. Dropping the guard reinstalls the
//! previous disposition.
//!
//! On non-Unix platforms the guard is inert.

use crate::error::Result;
use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Installed SIGINT handler; restores the previous one on drop.
pub struct InterruptGuard {
    #[cfg(unix)]
    previous: nix::sys::signal::SigAction,
}

#[cfg(unix)]
extern "C" fn on_sigint(_signal: std::ffi::c_int) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

impl InterruptGuard {
    /// Clear the flag and start catching SIGINT.
    #[cfg(unix)]
    pub fn install() -> Result<Self> {
        use crate::error::LaunchError;
        use nix::sys::signal::{SaFlags, SigAction, SigHandler, SigSet, Signal, sigaction};

        INTERRUPTED.store(false, Ordering::SeqCst);
        let action = SigAction::new(
            SigHandler::Handler(on_sigint),
            SaFlags::SA_RESTART,
            SigSet::empty(),
        );
        // SAFETY: the handler only stores to an atomic, which is async-signal-safe.
        let previous = unsafe { sigaction(Signal::SIGINT, &action) }.map_err(|e| {
            LaunchError::UserError(format!("failed to install interrupt handler: {}", e))
        })?;

        Ok(Self { previous })
    }

    #[cfg(not(unix))]
    pub fn install() -> Result<Self> {
        INTERRUPTED.store(false, Ordering::SeqCst);
        Ok(Self {})
    }

    /// Whether SIGINT arrived since [`InterruptGuard::install`].
    pub fn triggered(&self) -> bool {
        INTERRUPTED.load(Ordering::SeqCst)
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            use nix::sys::signal::{Signal, sigaction};
            // SAFETY: reinstates the disposition that was active before install.
            if let Err(e) = unsafe { sigaction(Signal::SIGINT, &self.previous) } {
                tracing::warn!(error = %e, "failed to restore SIGINT disposition");
            }
        }
    }
}

/// Set the flag as if SIGINT had been delivered.
#[cfg(test)]
pub(crate) fn simulate_interrupt() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}
