//! Agent execution for run-cursor.
//!
//! - **Command**: building the agent command line for a model
//! - **Dispatch**: running the agent with the prompt on stdin

mod command;
pub mod dispatch;

// Re-export public API
pub use command::AgentCommand;
pub use dispatch::{AgentResult, execute_agent};
