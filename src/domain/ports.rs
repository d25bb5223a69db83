use crate::domain::model::TransformResult;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    type Input: Send + 'static;
    type Output: Send + 'static;

    fn name(&self) -> &'static str;
    async fn extract(&self) -> Result<Vec<Self::Input>>;
    async fn transform(&self, data: Vec<Self::Input>) -> Result<TransformResult<Self::Output>>;
    async fn load(&self, result: TransformResult<Self::Output>) -> Result<String>;
}
