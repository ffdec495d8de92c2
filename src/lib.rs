pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::LocalStorage;
pub use config::{command::Command, profile::ProfileConfig, AssetConfig, AssetKind};
pub use crate::core::{engine::AssetEngine, minify::Minifier, pipeline::ModulePipeline};
pub use utils::error::{AssetError, Result};
