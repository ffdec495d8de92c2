use crate::utils::error::{AssetError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AssetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A module filename must be a bare file name carrying the profile extension.
pub fn validate_file_name(field_name: &str, file_name: &str, extension: &str) -> Result<()> {
    validate_non_empty_string(field_name, file_name)?;

    if file_name.contains(['/', '\\', '\0']) || file_name == "." || file_name == ".." {
        return Err(AssetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file_name.to_string(),
            reason: "File name must not contain path separators".to_string(),
        });
    }

    match std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(ext) if ext == extension => Ok(()),
        Some(ext) => Err(AssetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file_name.to_string(),
            reason: format!("Unsupported file extension: {}. Expected: {}", ext, extension),
        }),
        None => Err(AssetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file_name.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(AssetError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Duplicate entry".to_string(),
            });
        }
    }
    Ok(())
}
