// Application layer: wires a parsed command to its pipelines.

use crate::config::Command;
use crate::core::dedupe_pipeline::DedupePipeline;
use crate::core::etl::EtlEngine;
use crate::core::expand_pipeline::ExpandPipeline;
use crate::core::Storage;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Validates `command` and runs it against `storage`, returning every output
/// path written, in order.
///
/// `build` runs expand then dedupe; if expand fails, dedupe never starts.
pub async fn run_command<S: Storage + Clone>(command: &Command, storage: S) -> Result<Vec<String>> {
    command.validate()?;

    let outputs = match command {
        Command::Expand(config) => {
            vec![EtlEngine::new(ExpandPipeline::new(storage, config.clone())).run().await?]
        }
        Command::Dedupe(config) => {
            vec![EtlEngine::new(DedupePipeline::new(storage, config.clone())).run().await?]
        }
        Command::Build(config) => {
            let expanded = EtlEngine::new(ExpandPipeline::new(storage.clone(), config.expand_stage()))
                .run()
                .await?;
            let deduped = EtlEngine::new(DedupePipeline::new(storage, config.dedupe_stage()))
                .run()
                .await?;
            vec![expanded, deduped]
        }
    };

    Ok(outputs)
}
