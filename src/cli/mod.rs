//! CLI argument parsing for run-cursor.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Handlers live in the `commands` module.

use crate::models::AUTO_MODEL;
use clap::Parser;
use std::path::PathBuf;

/// Run cursor-agent on a company folder to generate a static website.
///
/// The folder must contain data.json plus the logo and post images. Output
/// is written to <folder>/cursor-<model>/, where the agent runs with the
/// rewritten prompt on its standard input.
#[derive(Parser, Debug)]
#[command(name = "run-cursor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder containing data.json and the company images.
    pub folder: Option<PathBuf>,

    /// Model to request from the agent ("auto" lets the agent choose).
    #[arg(default_value = AUTO_MODEL)]
    pub model: String,

    /// List known models and exit.
    #[arg(short = 'l', long)]
    pub list_models: bool,

    /// Print the model list as JSON (use with --list-models).
    #[arg(long, requires = "list_models")]
    pub json: bool,

    /// Launcher config file (default: ./run-cursor.yaml if present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prepare the output folder and prompt, print the command, do not run it.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging on stderr (RUST_LOG overrides).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Usage text printed when no folder is given.
pub fn usage() -> String {
    [
        "Usage: run-cursor <folder_path> [model]",
        "",
        "Examples:",
        "  run-cursor barbar_ribs_lahmajoon",
        "  run-cursor barbar_ribs_lahmajoon composer-1",
        "  run-cursor barbar_ribs_lahmajoon sonnet-4",
        "",
        "To list available models:",
        "  run-cursor --list-models",
    ]
    .join("\n")
}
