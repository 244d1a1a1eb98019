use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct RegistryEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> RegistryEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting implementor registry scan...");

        tracing::info!("Collecting implementor files...");
        let files = self.pipeline.collect().await?;
        tracing::info!("Collected {} files", files.len());
        self.monitor.log_stats("Collect");

        tracing::info!("Parsing mappings...");
        let parsed = self.pipeline.parse(files).await?;
        tracing::info!("Parsed {} mappings", parsed.len());
        self.monitor.log_stats("Parse");

        tracing::info!("Publishing to host...");
        let output_path = self.pipeline.publish(parsed).await?;
        tracing::info!("Reports saved to: {}", output_path);
        self.monitor.log_stats("Publish");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}
