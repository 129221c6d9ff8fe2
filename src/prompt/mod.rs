//! Prompt handling for the site generation agent.
//!
//! - **Default**: the built-in prompt template
//! - **Source**: choosing between a `prompt.txt` override and the default
//! - **Rewrite**: redirecting file references to the parent directory

mod default;
mod rewrite;
mod source;

pub use default::DEFAULT_PROMPT;
pub use rewrite::{PARENT_DIR_REWRITES, rewrite_for_parent_dir};
pub use source::{PromptSource, ResolvedPrompt, resolve_prompt};
