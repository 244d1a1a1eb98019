use anyhow::Context;
use doc_implementors::core::ConfigProvider;
use doc_implementors::utils::{logger, validation::Validate};
use doc_implementors::{
    HostContext, LocalStore, LoggingRegistrar, RegistryEngine, RemoteStore, ScanPipeline,
    TomlConfig,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("scan-config.toml"));

    // Batch runs are usually collected by log aggregators, so emit JSON.
    logger::init_json_logger();

    tracing::info!("🚀 Starting TOML-based implementors scan");
    tracing::info!("📁 Loading configuration from: {}", config_path.display());

    let config = TomlConfig::load(&config_path)
        .with_context(|| format!("failed to load config file '{}'", config_path.display()))?;

    config
        .validate()
        .context("configuration validation failed")?;

    tracing::info!("🔧 Profile: {}", config.scan.name);
    if let Some(description) = &config.scan.description {
        tracing::info!("   {}", description);
    }

    let mut host = HostContext::new();
    host.bind_registrar(Arc::new(LoggingRegistrar));
    let host = Arc::new(Mutex::new(host));

    let monitor_enabled = config.monitoring_enabled();
    let output_path = if config.is_remote() {
        let store = match config.source.timeout_seconds {
            Some(secs) => RemoteStore::with_timeout(
                config.doc_root().to_string(),
                config.output_path().to_string(),
                Duration::from_secs(secs),
            )?,
            None => RemoteStore::new(
                config.doc_root().to_string(),
                config.output_path().to_string(),
            ),
        };
        let pipeline = ScanPipeline::new(store, config, host);
        RegistryEngine::new_with_monitoring(pipeline, monitor_enabled)
            .run()
            .await?
    } else {
        let store = LocalStore::new(config.doc_root().to_string(), config.output_path().to_string());
        let pipeline = ScanPipeline::new(store, config, host);
        RegistryEngine::new_with_monitoring(pipeline, monitor_enabled)
            .run()
            .await?
    };

    tracing::info!("✅ Scan completed, reports under {}", output_path);
    Ok(())
}
