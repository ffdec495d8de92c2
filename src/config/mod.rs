#[cfg(feature = "cli")]
pub mod cli;
pub mod command;
pub mod profile;

use crate::domain::model::ModuleDescriptor;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Css,
    Js,
}

impl AssetKind {
    pub fn extension(&self) -> &'static str {
        match self {
            AssetKind::Css => "css",
            AssetKind::Js => "js",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Css => "CSS",
            AssetKind::Js => "JavaScript",
        }
    }

    pub fn binary_name(&self) -> &'static str {
        match self {
            AssetKind::Css => "build-css",
            AssetKind::Js => "build-js",
        }
    }

    /// Banner timestamp layout; stylesheets use ISO dates, scripts day-first.
    pub fn timestamp_format(&self) -> &'static str {
        match self {
            AssetKind::Css => "%Y-%m-%d %H:%M:%S",
            AssetKind::Js => "%d/%m/%Y %H:%M:%S",
        }
    }
}

/// Everything a split/build/watch run needs, resolved from a profile.
///
/// Paths are relative to the storage root (the working directory for the
/// binaries).
#[derive(Debug, Clone)]
pub struct AssetConfig {
    pub kind: AssetKind,
    pub brand: String,
    pub base_dir: PathBuf,
    pub input_file: PathBuf,
    pub modules_dir: PathBuf,
    pub output_file: PathBuf,
    pub modules: Vec<ModuleDescriptor>,
}

impl AssetConfig {
    pub fn input_name(&self) -> String {
        file_name_of(&self.input_file)
    }

    pub fn output_name(&self) -> String {
        file_name_of(&self.output_file)
    }

    pub fn module_path(&self, filename: &str) -> PathBuf {
        self.modules_dir.join(filename)
    }

    /// Build order: alphabetical by filename, independent of table order.
    pub fn build_order(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.modules.iter().map(|m| m.filename.as_str()).collect();
        names.sort_unstable();
        names
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
