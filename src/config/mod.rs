//! Launcher configuration for run-cursor.
//!
//! This module defines the Config struct that represents the optional
//! `run-cursor.yaml` file. Every field has a default, so running without a
//! config file reproduces the stock behavior: `cursor-agent --model <m>`,
//! `prompt.txt`, `data.json`, `cursor-<m>/prompt_used.txt`.

mod model;
mod operations;


// Re-export public API
pub use model::{Config, DEFAULT_CONFIG_FILE};
