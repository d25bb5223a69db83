pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, BuildConfig, Command, DedupeConfig, ExpandConfig};

pub use crate::app::run_command;
pub use crate::core::{dedupe_pipeline::DedupePipeline, etl::EtlEngine, expand_pipeline::ExpandPipeline};
pub use domain::model::{CommandRecord, DedupeKey, KeyPart, LabelMapping};
pub use domain::services::{dedupe_commands, expand_labels};
pub use utils::error::{CommandsError, Result};
