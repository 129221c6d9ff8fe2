//! Command implementations for run-cursor.
//!
//! Routes the parsed CLI to model listing or a launcher run and maps the
//! outcome to an exit code.

use crate::cli::{Cli, usage};
use crate::config::Config;
use crate::error::{LaunchError, Result};
use crate::exit_codes;
use crate::launcher::{self, RunRequest};
use crate::models;
use std::io::{self, Write};

/// Dispatch the parsed command line.
///
/// Returns the exit code for outcomes that are not errors: listing models
/// (0), printing usage (1), and a run that succeeded or failed.
pub fn dispatch(cli: Cli) -> Result<i32> {
    if cli.list_models {
        cmd_list_models(cli.json)?;
        return Ok(exit_codes::SUCCESS);
    }

    let Some(folder) = cli.folder else {
        println!("{}", usage());
        return Ok(exit_codes::USER_ERROR);
    };

    let request = RunRequest {
        folder,
        model: cli.model,
        dry_run: cli.dry_run,
    };
    cmd_run(cli.config.as_deref(), &request)
}

fn cmd_list_models(json: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    let written = if json {
        models::list_models_json(&mut out)
    } else {
        models::list_models(&mut out)
    };
    written.map_err(|e| LaunchError::UserError(format!("failed to write model list: {}", e)))
}

fn cmd_run(config_path: Option<&std::path::Path>, request: &RunRequest) -> Result<i32> {
    let config = Config::resolve(config_path)?;

    warn_if_unknown(&mut io::stdout().lock(), &request.model);

    if launcher::run(&config, request)? {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::USER_ERROR)
    }
}

/// Unknown models only warn; the name is still passed to the agent.
fn warn_if_unknown<W: Write>(out: &mut W, model: &str) {
    if models::is_known(model) {
        return;
    }
    if let Err(e) = models::warn_unknown_model(out, model) {
        tracing::warn!(error = %e, "failed to write unknown model warning");
    }
}
