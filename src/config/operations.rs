//! Config loading, validation, and utility operations.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{LaunchError, Result};
use std::path::Path;

impl Config {
    /// Resolve the launcher config.
    ///
    /// An explicit path must exist. Without one, `run-cursor.yaml` in the
    /// current directory is used when present, otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(LaunchError::UserError(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Self::load(path)
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::load(path)
                } else {
                    tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(LaunchError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|e| LaunchError::io("read config file", path, e))?;

        tracing::debug!(path = %path.display(), "loaded launcher config");
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| LaunchError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `agent_command` must parse and name a program
    /// - `model_flag` and every file name must be non-empty
    /// - file names must not contain path separators
    pub fn validate(&self) -> Result<()> {
        self.agent_argv()?;

        let required = [
            ("model_flag", &self.model_flag),
            ("prompt_file", &self.prompt_file),
            ("data_file", &self.data_file),
            ("output_prefix", &self.output_prefix),
            ("prompt_output", &self.prompt_output),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(LaunchError::UserError(format!(
                    "config validation failed: {} must be non-empty",
                    name
                )));
            }
        }

        for (name, value) in [
            ("data_file", &self.data_file),
            ("output_prefix", &self.output_prefix),
            ("prompt_output", &self.prompt_output),
        ] {
            if value.contains('/') || value.contains('\\') {
                return Err(LaunchError::UserError(format!(
                    "config validation failed: {} must be a plain file name (found '{}')",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Split `agent_command` into program and fixed arguments.
    pub fn agent_argv(&self) -> Result<Vec<String>> {
        let args = shell_words::split(&self.agent_command).map_err(|e| {
            LaunchError::UserError(format!(
                "failed to parse agent_command '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                self.agent_command, e
            ))
        })?;

        if args.is_empty() {
            return Err(LaunchError::UserError(
                "config validation failed: agent_command must name a program".to_string(),
            ));
        }

        Ok(args)
    }

    /// Name of the output directory for `model`.
    pub fn output_dir_name(&self, model: &str) -> String {
        format!("{}{}", self.output_prefix, model)
    }
}
