use crate::config::AssetConfig;
use crate::core::builder::build_artifact;
use crate::core::minify::Minifier;
use crate::core::splitter::split_modules;
use crate::core::{AssetPipeline, Storage};
use crate::domain::model::{BuildReport, SplitReport};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Local;

/// Split/build over a [`Storage`] backend, stamped with the current local time.
pub struct ModulePipeline<S: Storage> {
    storage: S,
    config: AssetConfig,
    minifier: Minifier,
}

impl<S: Storage> ModulePipeline<S> {
    pub fn new(storage: S, config: AssetConfig) -> Result<Self> {
        Ok(Self {
            storage,
            config,
            minifier: Minifier::new()?,
        })
    }
}

#[async_trait]
impl<S: Storage> AssetPipeline for ModulePipeline<S> {
    async fn split(&self) -> Result<SplitReport> {
        split_modules(&self.storage, &self.config, Local::now()).await
    }

    async fn build(&self) -> Result<BuildReport> {
        build_artifact(&self.storage, &self.config, &self.minifier, Local::now()).await
    }
}
