use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV report error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to parse implementors file '{file}': {reason}")]
    ParseError { file: String, reason: String },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Network,
    Config,
    Parse,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RegistryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::HttpError(_) => ErrorCategory::Network,
            Self::SerializationError(_) | Self::ParseError { .. } => ErrorCategory::Parse,
            Self::CsvError(_) | Self::ProcessingError { .. } => ErrorCategory::Processing,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::HttpError(_) => ErrorSeverity::Medium,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::SerializationError(_) | Self::CsvError(_) | Self::ProcessingError { .. } => {
                ErrorSeverity::High
            }
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(_) => {
                "Check that the doc root and output paths exist and are writable".to_string()
            }
            Self::HttpError(_) => {
                "Check the docs endpoint URL and network connectivity, then retry".to_string()
            }
            Self::SerializationError(_) => {
                "The file's embedded JSON is malformed; regenerate the docs".to_string()
            }
            Self::CsvError(_) => "Check the report output path and disk space".to_string(),
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again".to_string()
            }
            Self::ParseError { .. } => {
                "Regenerate the implementors file, or run without --strict to skip it".to_string()
            }
            Self::ProcessingError { .. } => "Re-run with --verbose for details".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ParseError { file, .. } => {
                format!("Could not read implementor data from {}", file)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_are_medium_severity() {
        let err = RegistryError::ParseError {
            file: "implementors/core/ops/drop/trait.Drop.js".to_string(),
            reason: "missing implementors marker".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Parse);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("trait.Drop.js"));
    }

    #[test]
    fn config_errors_are_high_severity() {
        let err = RegistryError::InvalidConfigValueError {
            field: "doc_root".to_string(),
            value: "".to_string(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Config);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
