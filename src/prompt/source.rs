//! Prompt resolution: local override file or the built-in default.

use super::default::DEFAULT_PROMPT;
use crate::error::{LaunchError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the prompt text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSource {
    /// Read from an override file.
    File(PathBuf),
    /// The built-in template.
    Default,
}

impl fmt::Display for PromptSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptSource::File(path) => write!(f, "{}", path.display()),
            PromptSource::Default => write!(f, "default prompt"),
        }
    }
}

/// A resolved prompt, before rewriting.
#[derive(Debug, Clone)]
pub struct ResolvedPrompt {
    pub source: PromptSource,
    pub text: String,
}

impl ResolvedPrompt {
    /// Length in characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// One-line report of the source and size.
    pub fn summary(&self) -> String {
        let verb = match self.source {
            PromptSource::File(_) => "Read prompt from",
            PromptSource::Default => "Using",
        };
        format!("✓ {} {} ({} characters)", verb, self.source, self.char_count())
    }
}

/// Resolve the prompt from `override_path` if it exists, else the default.
///
/// A relative `override_path` is looked up in the current working directory.
pub fn resolve_prompt(override_path: &Path) -> Result<ResolvedPrompt> {
    if override_path.exists() {
        let text = std::fs::read_to_string(override_path)
            .map_err(|e| LaunchError::io("read prompt file", override_path, e))?;
        Ok(ResolvedPrompt {
            source: PromptSource::File(override_path.to_path_buf()),
            text,
        })
    } else {
        Ok(ResolvedPrompt {
            source: PromptSource::Default,
            text: DEFAULT_PROMPT.to_string(),
        })
    }
}
