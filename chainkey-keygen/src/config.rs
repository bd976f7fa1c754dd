//! Keygen configuration.

use crate::cli::{Cli, Commands};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Labelled lines for people.
    Human,
    /// Pretty-printed JSON for scripts.
    Json,
}

/// Complete keygen configuration.
#[derive(Debug, Clone)]
pub struct KeygenConfig {
    /// The action to perform.
    pub command: Commands,

    /// Output format.
    pub output: OutputFormat,

    /// Log level used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl KeygenConfig {
    /// Create a keygen configuration from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        let output = if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        };

        Self {
            command: cli.command.clone(),
            output,
            log_level: cli.log_level.clone(),
        }
    }
}
