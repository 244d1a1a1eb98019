pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_file_extensions, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "doc-implementors")]
#[command(about = "Scans rustdoc implementor registry files and publishes them to a host viewer")]
pub struct CliConfig {
    #[arg(long, default_value = "./doc")]
    pub doc_root: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',')]
    pub implementor_files: Vec<String>,

    #[arg(long, help = "Abort on the first malformed implementors file")]
    pub strict: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn doc_root(&self) -> &str {
        &self.doc_root
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn implementor_files(&self) -> &[String] {
        &self.implementor_files
    }

    fn strict(&self) -> bool {
        self.strict
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("doc_root", &self.doc_root)?;
        validate_path("output_path", &self.output_path)?;
        validate_file_extensions("implementor_files", &self.implementor_files, &["js"])?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            doc_root: "./doc".to_string(),
            output_path: "./output".to_string(),
            implementor_files: vec![],
            strict: false,
            verbose: false,
            monitor: false,
        }
    }

    #[test]
    fn default_config_validates() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn non_js_implementor_file_is_rejected() {
        let mut config = base_config();
        config.implementor_files = vec!["implementors/trait.Drop.html".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_doc_root_is_rejected() {
        let mut config = base_config();
        config.doc_root = String::new();
        assert!(config.validate().is_err());
    }
}
