use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs one full read-transform-write pass and returns the output path.
    /// Nothing is written unless extract and transform both succeed.
    pub async fn run(&self) -> Result<String> {
        let name = self.pipeline.name();
        tracing::debug!("Starting {} pass", name);

        let raw_data = self.pipeline.extract().await?;
        tracing::debug!("{}: extracted {} records", name, raw_data.len());

        let transformed = self.pipeline.transform(raw_data).await?;
        tracing::debug!(
            "{}: {} records in, {} out, {} dropped",
            name,
            transformed.input_count,
            transformed.processed_records.len(),
            transformed.dropped_count
        );

        let output_path = self.pipeline.load(transformed).await?;
        tracing::debug!("{}: output saved to {}", name, output_path);

        Ok(output_path)
    }
}
