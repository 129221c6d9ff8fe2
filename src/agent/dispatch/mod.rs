//! Agent subprocess dispatch and execution.
//!
//! - Prompt streamed to the child's stdin
//! - stdout/stderr inherited so output appears live
//! - Unbounded wait, cancellable with Ctrl-C

mod executor;
mod interrupt;

pub use executor::{AgentResult, execute_agent};
pub use interrupt::InterruptGuard;

#[cfg(test)]
pub(crate) use interrupt::simulate_interrupt;
