use crate::core::codec::{parse_records, to_pretty_json};
use crate::core::{CommandRecord, ConfigProvider, LabelMapping, Pipeline, Storage, TransformResult};
use crate::domain::services::expand_labels;
use crate::utils::error::Result;

/// Reads label mappings and writes one `addToProject` command per project.
pub struct ExpandPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ExpandPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ExpandPipeline<S, C> {
    type Input = LabelMapping;
    type Output = CommandRecord;

    fn name(&self) -> &'static str {
        "expand"
    }

    async fn extract(&self) -> Result<Vec<LabelMapping>> {
        let path = self.config.input_path();
        let raw = self.storage.read_file(path).await?;
        parse_records(path, &raw)
    }

    async fn transform(&self, data: Vec<LabelMapping>) -> Result<TransformResult<CommandRecord>> {
        let commands = expand_labels(&data);
        Ok(TransformResult::new(commands, data.len(), 0))
    }

    async fn load(&self, result: TransformResult<CommandRecord>) -> Result<String> {
        let path = self.config.output_path();
        let json = to_pretty_json(&result.processed_records)?;
        self.storage.write_file(path, &json).await?;

        tracing::info!(
            "{} commands written successfully to {}",
            result.processed_records.len(),
            path
        );
        Ok(path.to_string())
    }
}
