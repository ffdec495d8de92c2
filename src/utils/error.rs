use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Profile parsing error: {0}")]
    ProfileParseError(#[from] toml::de::Error),

    #[error("Invalid pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[cfg(feature = "watch")]
    #[error("File watcher error: {0}")]
    WatchError(#[from] notify::Error),

    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Modules directory does not exist: {}", path.display())]
    ModulesDirMissing { path: PathBuf },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
    Watch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AssetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AssetError::IoError(_) => ErrorCategory::Io,
            AssetError::ProfileParseError(_)
            | AssetError::PatternError(_)
            | AssetError::MissingConfigError { .. }
            | AssetError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AssetError::InputNotFound { .. } | AssetError::ModulesDirMissing { .. } => {
                ErrorCategory::Input
            }
            #[cfg(feature = "watch")]
            AssetError::WatchError(_) => ErrorCategory::Watch,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Watch => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AssetError::InputNotFound { path } => {
                format!("Create {} or run from the project root", path.display())
            }
            AssetError::ModulesDirMissing { .. } => {
                "Run the `split` command first to generate the modules".to_string()
            }
            AssetError::IoError(_) => "Check file permissions and free disk space".to_string(),
            AssetError::ProfileParseError(_)
            | AssetError::MissingConfigError { .. }
            | AssetError::InvalidConfigValueError { .. } => {
                "Fix the module table in the asset profile".to_string()
            }
            AssetError::PatternError(_) => "Check the minifier patterns".to_string(),
            #[cfg(feature = "watch")]
            AssetError::WatchError(_) => {
                "Make sure the modules directory exists and is readable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AssetError::InputNotFound { path } => format!("File not found: {}", path.display()),
            AssetError::ModulesDirMissing { path } => {
                format!("Directory {} does not exist!", path.display())
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_is_input_category() {
        let err = AssetError::InputNotFound {
            path: PathBuf::from("app/static/css/style.css"),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("style.css"));
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = AssetError::MissingConfigError {
            field: "modules".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.recovery_suggestion().contains("profile"));
    }
}
