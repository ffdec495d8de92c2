use crate::config::AssetConfig;
use crate::core::banner::module_banner;
use crate::core::extract::extract_section;
use crate::domain::model::{ModuleStat, SplitReport};
use crate::domain::ports::Storage;
use crate::utils::error::{AssetError, Result};
use chrono::{DateTime, Local};

/// Slices the monolithic input into one file per module descriptor, in table
/// order. Modules whose markers are missing are reported and skipped; only a
/// missing input file fails the run.
pub async fn split_modules<S: Storage>(
    storage: &S,
    config: &AssetConfig,
    generated_at: DateTime<Local>,
) -> Result<SplitReport> {
    if !storage.exists(&config.input_file).await {
        return Err(AssetError::InputNotFound {
            path: config.input_file.clone(),
        });
    }

    tracing::debug!("Reading {}", config.input_file.display());
    let content = storage.read_to_string(&config.input_file).await?;

    storage.create_dir_all(&config.modules_dir).await?;

    let source_name = config.input_name();
    let mut report = SplitReport {
        modules_dir: config.modules_dir.clone(),
        ..Default::default()
    };

    for module in &config.modules {
        let section = extract_section(
            &content,
            &module.start_marker,
            module.end_marker.as_deref(),
        );

        if section.is_empty() {
            tracing::warn!("No content found for {}", module.filename);
            report.skipped.push(module.filename.clone());
            continue;
        }

        let banner = module_banner(config.kind, module, &source_name, generated_at);
        let path = config.module_path(&module.filename);
        storage.write(&path, &format!("{}{}", banner, section)).await?;

        tracing::debug!("Wrote {} ({} bytes)", path.display(), section.len());
        report.written.push(ModuleStat {
            filename: module.filename.clone(),
            description: module.description.clone(),
            lines: section.split('\n').count(),
            bytes: section.len(),
        });
    }

    Ok(report)
}
