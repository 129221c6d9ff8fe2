//! run-cursor: prepare a company folder and launch cursor-agent on it.
//!
//! The launch sequence lives in [`launcher`]; the binary in `main.rs` only
//! parses arguments, sets up logging, and maps the outcome to an exit code.

pub mod agent;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod launcher;
pub mod logging;
pub mod models;
pub mod prompt;
pub mod workdir;

#[cfg(test)]
mod test_support;
