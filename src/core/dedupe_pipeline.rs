use crate::core::codec::{parse_records, to_pretty_json};
use crate::core::{CommandRecord, ConfigProvider, Pipeline, Storage, TransformResult};
use crate::domain::services::dedupe_commands;
use crate::utils::error::Result;

/// Reads command records and writes them back without repeated
/// `(name, addToProject.url)` pairs.
pub struct DedupePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> DedupePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DedupePipeline<S, C> {
    type Input = CommandRecord;
    type Output = CommandRecord;

    fn name(&self) -> &'static str {
        "dedupe"
    }

    async fn extract(&self) -> Result<Vec<CommandRecord>> {
        let path = self.config.input_path();
        let raw = self.storage.read_file(path).await?;
        parse_records(path, &raw)
    }

    async fn transform(&self, data: Vec<CommandRecord>) -> Result<TransformResult<CommandRecord>> {
        Ok(dedupe_commands(data))
    }

    async fn load(&self, result: TransformResult<CommandRecord>) -> Result<String> {
        let path = self.config.output_path();
        let json = to_pretty_json(&result.processed_records)?;
        self.storage.write_file(path, &json).await?;

        // Quiet on success unless --verbose.
        tracing::debug!(
            "Kept {} of {} commands ({} duplicates removed)",
            result.processed_records.len(),
            result.input_count,
            result.dropped_count
        );
        Ok(path.to_string())
    }
}
