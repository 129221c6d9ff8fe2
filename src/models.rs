//! Known model identifiers for the agent.
//!
//! The list is presentational: `run` accepts any model string and only warns
//! when it is not listed here.

use serde::Serialize;
use std::io::{self, Write};

/// Sentinel meaning "let the agent choose"; no model flag is passed.
pub const AUTO_MODEL: &str = "auto";

/// Models offered by `--list-models`, sentinel first.
pub const AVAILABLE_MODELS: &[&str] = &[
    AUTO_MODEL,
    "composer-1",
    "gpt-4",
    "gpt-4-turbo",
    "gpt-5",
    "sonnet-4",
    "sonnet-4-thinking",
    "o1",
    "o1-mini",
];

const RULE_WIDTH: usize = 60;

/// Separator line used around agent output and listings.
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Whether `model` is the "no explicit selection" sentinel.
pub fn is_auto(model: &str) -> bool {
    model == AUTO_MODEL
}

/// Whether `model` appears in the allow-list.
pub fn is_known(model: &str) -> bool {
    AVAILABLE_MODELS.contains(&model)
}

#[derive(Serialize)]
struct ModelEntry<'a> {
    name: &'a str,
    default: bool,
}

/// Print the allow-list, marking the sentinel as default.
pub fn list_models<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Available models:")?;
    writeln!(out, "{}", rule())?;
    for model in AVAILABLE_MODELS {
        let marker = if is_auto(model) { " (default)" } else { "" };
        writeln!(out, "  {}{}", model, marker)?;
    }
    writeln!(out, "{}", rule())?;
    writeln!(
        out,
        "\nNote: Model availability depends on your Cursor subscription."
    )?;
    writeln!(
        out,
        "Use '{}' to let Cursor automatically select the best model.",
        AUTO_MODEL
    )?;
    Ok(())
}

/// Print the allow-list as a JSON array of `{name, default}` objects.
pub fn list_models_json<W: Write>(out: &mut W) -> io::Result<()> {
    let entries: Vec<ModelEntry<'_>> = AVAILABLE_MODELS
        .iter()
        .map(|&name| ModelEntry {
            name,
            default: is_auto(name),
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &entries).map_err(io::Error::other)?;
    writeln!(out)?;
    Ok(())
}

/// Print the warning shown for a model outside the allow-list.
pub fn warn_unknown_model<W: Write>(out: &mut W, model: &str) -> io::Result<()> {
    tracing::warn!(model, "model not in known models list");
    writeln!(out, "⚠ Warning: '{}' not in known models list.", model)?;
    writeln!(out, "It may still work if it's a valid Cursor model name.")?;
    writeln!(
        out,
        "Use 'run-cursor --list-models' to see available models.\n"
    )?;
    Ok(())
}
