use crate::core::ConfigProvider;
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{
    validate_file_extensions, validate_path, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Profile for the batch scanner binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub scan: ScanConfig,
    pub source: SourceConfig,
    pub report: ReportConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    pub name: String,
    pub description: Option<String>,
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// "local" (filesystem doc root) or "remote" (hosted docs root URL).
    pub r#type: String,
    pub root: String,
    pub timeout_seconds: Option<u64>,
    pub implementor_files: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub output_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: TomlConfig =
            toml::from_str(&contents).map_err(|e| RegistryError::ConfigError {
                message: format!("failed to parse {}: {}", path.display(), e),
            })?;
        Ok(config)
    }

    pub fn is_remote(&self) -> bool {
        self.source.r#type == "remote"
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn doc_root(&self) -> &str {
        &self.source.root
    }

    fn output_path(&self) -> &str {
        &self.report.output_path
    }

    fn implementor_files(&self) -> &[String] {
        self.source.implementor_files.as_deref().unwrap_or(&[])
    }

    fn strict(&self) -> bool {
        self.scan.strict.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        match self.source.r#type.as_str() {
            "local" => validate_path("source.root", &self.source.root)?,
            "remote" => {
                validate_url("source.root", &self.source.root)?;
                // A remote root cannot be listed, so the files must be named.
                if self.implementor_files().is_empty() {
                    return Err(RegistryError::ConfigError {
                        message: "remote sources require source.implementor_files".to_string(),
                    });
                }
            }
            other => {
                return Err(RegistryError::InvalidConfigValueError {
                    field: "source.type".to_string(),
                    value: other.to_string(),
                    reason: "must be 'local' or 'remote'".to_string(),
                });
            }
        }

        validate_path("report.output_path", &self.report.output_path)?;
        validate_file_extensions("source.implementor_files", self.implementor_files(), &["js"])?;

        if let Some(timeout) = self.source.timeout_seconds {
            validate_positive_number("source.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCAL_PROFILE: &str = r#"
[scan]
name = "wasmtime docs"
description = "nightly implementors scan"
strict = true

[source]
type = "local"
root = "./doc/api"

[report]
output_path = "./reports"

[monitoring]
enabled = true
"#;

    const REMOTE_PROFILE: &str = r#"
[scan]
name = "hosted docs"

[source]
type = "remote"
root = "https://docs.example.com/api"
timeout_seconds = 30
implementor_files = ["implementors/core/ops/drop/trait.Drop.js"]

[report]
output_path = "./reports"
"#;

    #[test]
    fn local_profile_parses_and_validates() {
        let config: TomlConfig = toml::from_str(LOCAL_PROFILE).unwrap();
        assert!(config.validate().is_ok());
        assert!(!config.is_remote());
        assert!(config.strict());
        assert!(config.monitoring_enabled());
        assert_eq!(config.doc_root(), "./doc/api");
        assert!(config.implementor_files().is_empty());
    }

    #[test]
    fn remote_profile_parses_and_validates() {
        let config: TomlConfig = toml::from_str(REMOTE_PROFILE).unwrap();
        assert!(config.validate().is_ok());
        assert!(config.is_remote());
        assert!(!config.strict());
        assert_eq!(config.implementor_files().len(), 1);
    }

    #[test]
    fn remote_profile_without_file_list_is_rejected() {
        let mut config: TomlConfig = toml::from_str(REMOTE_PROFILE).unwrap();
        config.source.implementor_files = None;
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_source_type_is_rejected() {
        let mut config: TomlConfig = toml::from_str(LOCAL_PROFILE).unwrap();
        config.source.r#type = "s3".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, RegistryError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config: TomlConfig = toml::from_str(REMOTE_PROFILE).unwrap();
        config.source.timeout_seconds = Some(0);
        assert!(config.validate().is_err());
    }
}
