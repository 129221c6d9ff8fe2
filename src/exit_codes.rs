//! Exit code constants for the run-cursor CLI.
//!
//! The launcher only distinguishes two outcomes:
//! - 0: Success (agent exited cleanly, models listed, or dry run)
//! - 1: Failure (bad arguments, missing folder/data file, agent failure, interrupt)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any failure: validation, filesystem, or agent invocation.
pub const USER_ERROR: i32 = 1;
