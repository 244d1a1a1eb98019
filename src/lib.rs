pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::local::LocalStore;
pub use crate::adapters::registrar::{CollectingRegistrar, LoggingRegistrar};
pub use crate::adapters::remote::RemoteStore;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::engine::RegistryEngine;
pub use crate::core::host::HostContext;
pub use crate::core::pipeline::ScanPipeline;
pub use crate::domain::model::ImplementorMap;
pub use crate::domain::ports::Registrar;
pub use crate::utils::error::{RegistryError, Result};
