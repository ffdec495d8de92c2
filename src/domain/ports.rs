use crate::domain::model::{BuildReport, SplitReport};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub trait Storage: Send + Sync {
    fn read_to_string(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &Path) -> impl std::future::Future<Output = bool> + Send;
    fn create_dir_all(&self, path: &Path) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait AssetPipeline: Send + Sync {
    async fn split(&self) -> Result<SplitReport>;
    async fn build(&self) -> Result<BuildReport>;
}
