//! Agent command line construction.

use crate::config::Config;
use crate::error::Result;
use crate::models;

/// Program and arguments for one agent invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl AgentCommand {
    /// Build the command for `model`.
    ///
    /// The model flag and model name are appended only when `model` is not
    /// the `auto` sentinel. The model string is passed verbatim.
    pub fn build(config: &Config, model: &str) -> Result<Self> {
        let mut argv = config.agent_argv()?;
        let program = argv.remove(0);
        let mut args = argv;

        if !models::is_auto(model) {
            args.push(config.model_flag.clone());
            args.push(model.to_string());
        }

        Ok(Self { program, args })
    }

    /// Full argument vector, program first.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }

    /// Shell-quoted rendering for logs and dry runs.
    pub fn display(&self) -> String {
        shell_words::join(self.argv())
    }
}
