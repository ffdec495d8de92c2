use crate::config::AssetConfig;
use crate::core::banner::build_banner;
use crate::core::minify::Minifier;
use crate::domain::model::{BuildReport, BundledModule};
use crate::domain::ports::Storage;
use crate::utils::error::{AssetError, Result};
use chrono::{DateTime, Local};

/// Concatenates the module files in alphabetical order, minifies the result
/// and overwrites the output artifact. Absent module files are left out.
pub async fn build_artifact<S: Storage>(
    storage: &S,
    config: &AssetConfig,
    minifier: &Minifier,
    generated_at: DateTime<Local>,
) -> Result<BuildReport> {
    if !storage.exists(&config.modules_dir).await {
        return Err(AssetError::ModulesDirMissing {
            path: config.modules_dir.clone(),
        });
    }

    let mut report = BuildReport {
        output_file: config.output_file.clone(),
        ..Default::default()
    };
    let mut sources = Vec::new();

    for filename in config.build_order() {
        let path = config.module_path(filename);

        if !storage.exists(&path).await {
            tracing::warn!("Module file not found: {}", path.display());
            report.missing.push(filename.to_string());
            continue;
        }

        let content = storage.read_to_string(&path).await?;
        report.original_bytes += content.len();
        report.bundled.push(BundledModule {
            filename: filename.to_string(),
            bytes: content.len(),
        });
        sources.push(content);
    }

    let banner = build_banner(
        config.kind,
        &config.brand,
        report.module_count(),
        generated_at,
    );
    let combined = format!("{}{}", banner, sources.join("\n\n"));
    let artifact = minifier.minify(config.kind, &combined);

    storage.write(&config.output_file, &artifact).await?;
    report.minified_bytes = artifact.len();

    tracing::debug!(
        "Built {} from {} modules ({} -> {} bytes)",
        config.output_file.display(),
        report.module_count(),
        report.original_bytes,
        report.minified_bytes
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalStorage;
    use crate::config::profile::ProfileConfig;
    use tempfile::TempDir;

    const PROFILE: &str = r#"
[asset]
kind = "css"
brand = "ACME"
base_dir = "css"
input_file = "style.css"
output_file = "main.min.css"

[[modules]]
filename = "02-b.css"
start = "/* B */"
description = "B"

[[modules]]
filename = "01-a.css"
start = "/* A */"
end = "/* B */"
description = "A"
"#;

    #[tokio::test]
    async fn test_build_uses_alphabetical_order() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        let config = ProfileConfig::from_toml_str(PROFILE).unwrap().asset_config();

        storage
            .write(&config.module_path("02-b.css"), ".b { top: 0; }")
            .await
            .unwrap();
        storage
            .write(&config.module_path("01-a.css"), ".a { top: 0; }")
            .await
            .unwrap();

        let minifier = Minifier::new().unwrap();
        let report = build_artifact(&storage, &config, &minifier, Local::now())
            .await
            .unwrap();

        assert_eq!(report.module_count(), 2);
        assert_eq!(report.bundled[0].filename, "01-a.css");

        let artifact = storage.read_to_string(&config.output_file).await.unwrap();
        assert!(artifact.starts_with("/*!"));
        assert!(artifact.ends_with(".a{top:0}.b{top:0}"));
        assert!(artifact.contains("Modules: 2 files"));
        assert_eq!(report.minified_bytes, artifact.len());
    }

    #[tokio::test]
    async fn test_build_without_modules_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        let config = ProfileConfig::from_toml_str(PROFILE).unwrap().asset_config();
        let minifier = Minifier::new().unwrap();

        let result = build_artifact(&storage, &config, &minifier, Local::now()).await;
        assert!(matches!(result, Err(AssetError::ModulesDirMissing { .. })));
        assert!(!storage.exists(&config.output_file).await);
    }
}
