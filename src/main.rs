use clap::Parser;
use doc_implementors::utils::{logger, validation::Validate};
use doc_implementors::{
    CliConfig, HostContext, LocalStore, LoggingRegistrar, RegistryEngine, ScanPipeline,
};
use std::sync::Arc;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting doc-implementors CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let store = LocalStore::new(config.doc_root.clone(), config.output_path.clone());

    // The CLI is its own host: it binds a registrar up front, so every
    // scanned mapping dispatches instead of parking in the pending slot.
    let mut host = HostContext::new();
    host.bind_registrar(Arc::new(LoggingRegistrar));
    let host = Arc::new(Mutex::new(host));

    let pipeline = ScanPipeline::new(store, config, host);
    let engine = RegistryEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Scan completed successfully!");
            tracing::info!("📁 Reports saved to: {}", output_path);
            println!("✅ Scan completed successfully!");
            println!("📁 Reports saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Scan failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                doc_implementors::utils::error::ErrorSeverity::Low => 0,
                doc_implementors::utils::error::ErrorSeverity::Medium => 2,
                doc_implementors::utils::error::ErrorSeverity::High => 1,
                doc_implementors::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
