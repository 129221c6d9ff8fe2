//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// File name looked up in the current directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "run-cursor.yaml";

/// Configuration for the launcher.
///
/// Unknown fields in the YAML are preserved in `extra` and otherwise ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Agent invocation
    // =========================================================================
    /// Agent executable, optionally followed by fixed arguments.
    /// Split with shell quoting rules (default: "cursor-agent").
    #[serde(default = "default_agent_command")]
    pub agent_command: String,

    /// Flag placed before the model name when a model is selected.
    #[serde(default = "default_model_flag")]
    pub model_flag: String,

    /// Extra environment variables for the agent process.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub environment: HashMap<String, String>,

    // =========================================================================
    // File layout
    // =========================================================================
    /// Prompt override read from the current directory.
    #[serde(default = "default_prompt_file")]
    pub prompt_file: String,

    /// Data file that must exist directly inside the target folder.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Prefix of the per-model output directory.
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,

    /// Name of the rewritten prompt saved inside the output directory.
    #[serde(default = "default_prompt_output")]
    pub prompt_output: String,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agent_command: default_agent_command(),
            model_flag: default_model_flag(),
            environment: HashMap::new(),
            prompt_file: default_prompt_file(),
            data_file: default_data_file(),
            output_prefix: default_output_prefix(),
            prompt_output: default_prompt_output(),
            extra: BTreeMap::new(),
        }
    }
}

fn default_agent_command() -> String {
    "cursor-agent".to_string()
}

fn default_model_flag() -> String {
    "--model".to_string()
}

fn default_prompt_file() -> String {
    "prompt.txt".to_string()
}

fn default_data_file() -> String {
    "data.json".to_string()
}

fn default_output_prefix() -> String {
    "cursor-".to_string()
}

fn default_prompt_output() -> String {
    "prompt_used.txt".to_string()
}
