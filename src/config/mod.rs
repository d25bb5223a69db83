pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LABELS_PATH: &str = "labels.json";
pub const DEFAULT_COMMANDS_PATH: &str = "out/commands.json";
pub const DEFAULT_DEDUPED_PATH: &str = "out/commands-deduped.json";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "label-commands")]
#[command(about = "Expand label-to-project mappings into commands and dedupe them")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Subcommand))]
pub enum Command {
    /// Turn label mappings into one addToProject command per project
    Expand(ExpandConfig),
    /// Remove commands that repeat an earlier name and project URL
    Dedupe(DedupeConfig),
    /// Expand, then dedupe the expanded commands
    Build(BuildConfig),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct ExpandConfig {
    /// JSON array of {label, projects} records
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_LABELS_PATH))]
    pub input: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_COMMANDS_PATH))]
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct DedupeConfig {
    /// JSON array of command records
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_COMMANDS_PATH))]
    pub input: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_DEDUPED_PATH))]
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct BuildConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_LABELS_PATH))]
    pub labels: String,

    /// Intermediate file, written by expand and read by dedupe
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_COMMANDS_PATH))]
    pub commands: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_DEDUPED_PATH))]
    pub deduped: String,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_LABELS_PATH.to_string(),
            output: DEFAULT_COMMANDS_PATH.to_string(),
        }
    }
}

impl Default for DedupeConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_COMMANDS_PATH.to_string(),
            output: DEFAULT_DEDUPED_PATH.to_string(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS_PATH.to_string(),
            commands: DEFAULT_COMMANDS_PATH.to_string(),
            deduped: DEFAULT_DEDUPED_PATH.to_string(),
        }
    }
}

impl BuildConfig {
    pub fn expand_stage(&self) -> ExpandConfig {
        ExpandConfig {
            input: self.labels.clone(),
            output: self.commands.clone(),
        }
    }

    pub fn dedupe_stage(&self) -> DedupeConfig {
        DedupeConfig {
            input: self.commands.clone(),
            output: self.deduped.clone(),
        }
    }
}

impl ConfigProvider for ExpandConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }
}

impl ConfigProvider for DedupeConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }
}

impl Validate for ExpandConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        validate_distinct_paths("output", &self.input, &self.output)
    }
}

impl Validate for DedupeConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        validate_distinct_paths("output", &self.input, &self.output)
    }
}

impl Validate for BuildConfig {
    fn validate(&self) -> Result<()> {
        validate_path("labels", &self.labels)?;
        validate_path("commands", &self.commands)?;
        validate_path("deduped", &self.deduped)?;
        validate_distinct_paths("commands", &self.labels, &self.commands)?;
        validate_distinct_paths("deduped", &self.commands, &self.deduped)?;
        validate_distinct_paths("deduped", &self.labels, &self.deduped)
    }
}

impl Validate for Command {
    fn validate(&self) -> Result<()> {
        match self {
            Command::Expand(config) => config.validate(),
            Command::Dedupe(config) => config.validate(),
            Command::Build(config) => config.validate(),
        }
    }
}
