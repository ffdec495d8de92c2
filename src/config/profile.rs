use crate::config::{AssetConfig, AssetKind};
use crate::domain::model::ModuleDescriptor;
use crate::utils::error::{AssetError, Result};
use crate::utils::validation::{
    validate_file_name, validate_non_empty_string, validate_unique, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CSS_PROFILE: &str = include_str!("../../profiles/css.toml");
const JS_PROFILE: &str = include_str!("../../profiles/js.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub asset: AssetSection,
    #[serde(default)]
    pub modules: Vec<ModuleDescriptor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSection {
    pub kind: AssetKind,
    pub brand: String,
    pub base_dir: String,
    pub input_file: String,
    #[serde(default = "default_modules_dir")]
    pub modules_dir: String,
    pub output_file: String,
}

fn default_modules_dir() -> String {
    "modules".to_string()
}

impl ProfileConfig {
    /// Module tables compiled into the binary.
    pub fn builtin(kind: AssetKind) -> Result<Self> {
        match kind {
            AssetKind::Css => Self::from_toml_str(CSS_PROFILE),
            AssetKind::Js => Self::from_toml_str(JS_PROFILE),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let profile: ProfileConfig = toml::from_str(content)?;
        Ok(profile)
    }

    pub fn asset_config(&self) -> AssetConfig {
        let base_dir = PathBuf::from(&self.asset.base_dir);
        AssetConfig {
            kind: self.asset.kind,
            brand: self.asset.brand.clone(),
            input_file: base_dir.join(&self.asset.input_file),
            modules_dir: base_dir.join(&self.asset.modules_dir),
            output_file: base_dir.join(&self.asset.output_file),
            base_dir,
            modules: self.modules.clone(),
        }
    }
}

impl Validate for ProfileConfig {
    fn validate(&self) -> Result<()> {
        let extension = self.asset.kind.extension();

        validate_non_empty_string("asset.brand", &self.asset.brand)?;
        validate_file_name("asset.input_file", &self.asset.input_file, extension)?;
        validate_file_name("asset.output_file", &self.asset.output_file, extension)?;
        validate_non_empty_string("asset.modules_dir", &self.asset.modules_dir)?;

        if self.modules.is_empty() {
            return Err(AssetError::MissingConfigError {
                field: "modules".to_string(),
            });
        }

        for module in &self.modules {
            validate_file_name("modules.filename", &module.filename, extension)?;
            validate_non_empty_string("modules.start", &module.start_marker)?;
            validate_non_empty_string("modules.description", &module.description)?;

            if module.filename == self.asset.output_file {
                return Err(AssetError::InvalidConfigValueError {
                    field: "modules.filename".to_string(),
                    value: module.filename.clone(),
                    reason: "Module would overwrite the build output".to_string(),
                });
            }
        }

        validate_unique(
            "modules.filename",
            self.modules.iter().map(|m| m.filename.as_str()),
        )
    }
}
