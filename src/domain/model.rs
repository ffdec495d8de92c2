use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One contiguous region of the monolithic source, keyed by its module filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub filename: String,
    #[serde(rename = "start")]
    pub start_marker: String,
    #[serde(rename = "end", default)]
    pub end_marker: Option<String>,
    pub description: String,
    /// Usage notes shown by `list` and embedded in script banners.
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleStat {
    pub filename: String,
    pub description: String,
    pub lines: usize,
    pub bytes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SplitReport {
    pub modules_dir: PathBuf,
    pub written: Vec<ModuleStat>,
    /// Modules whose markers were not found in the source.
    pub skipped: Vec<String>,
}

impl SplitReport {
    pub fn total_lines(&self) -> usize {
        self.written.iter().map(|m| m.lines).sum()
    }

    pub fn total_bytes(&self) -> usize {
        self.written.iter().map(|m| m.bytes).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledModule {
    pub filename: String,
    pub bytes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub output_file: PathBuf,
    pub bundled: Vec<BundledModule>,
    /// Module files that were absent and left out of the artifact.
    pub missing: Vec<String>,
    pub original_bytes: usize,
    pub minified_bytes: usize,
}

impl BuildReport {
    pub fn module_count(&self) -> usize {
        self.bundled.len()
    }

    pub fn saved_bytes(&self) -> i64 {
        self.original_bytes as i64 - self.minified_bytes as i64
    }

    pub fn saved_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        self.saved_bytes() as f64 / self.original_bytes as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_percent() {
        let report = BuildReport {
            original_bytes: 200,
            minified_bytes: 150,
            ..Default::default()
        };
        assert_eq!(report.saved_bytes(), 50);
        assert!((report.saved_percent() - 25.0).abs() < 1e-9);

        let empty = BuildReport::default();
        assert_eq!(empty.saved_percent(), 0.0);
    }

    #[test]
    fn test_split_totals() {
        let report = SplitReport {
            written: vec![
                ModuleStat {
                    filename: "01-reset.css".to_string(),
                    description: "Reset".to_string(),
                    lines: 10,
                    bytes: 300,
                },
                ModuleStat {
                    filename: "02-navbar.css".to_string(),
                    description: "Navbar".to_string(),
                    lines: 5,
                    bytes: 100,
                },
            ],
            ..Default::default()
        };
        assert_eq!(report.total_lines(), 15);
        assert_eq!(report.total_bytes(), 400);
    }
}
