pub mod banner;
pub mod builder;
pub mod engine;
pub mod extract;
pub mod minify;
pub mod pipeline;
pub mod splitter;
pub mod watcher;

pub use crate::domain::model::{BuildReport, ModuleDescriptor, SplitReport};
pub use crate::domain::ports::{AssetPipeline, Storage};
pub use crate::utils::error::Result;
