use crate::core::DocStore;
use crate::utils::error::Result;
use reqwest::Client;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Fetches implementor files from a hosted docs root over HTTP. Listing is
/// not possible against a plain HTTP root, so the file list must come from
/// configuration. Reports are written to a local output directory.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    base_url: String,
    output_path: String,
    client: Client,
}

impl RemoteStore {
    pub fn new(base_url: String, output_path: String) -> Self {
        Self {
            base_url,
            output_path,
            client: Client::new(),
        }
    }

    /// Store with a per-request timeout, for docs hosts that hang instead
    /// of failing.
    pub fn with_timeout(
        base_url: String,
        output_path: String,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url,
            output_path,
            client,
        })
    }
}

impl DocStore for RemoteStore {
    async fn read_file(&self, path: &str) -> Result<String> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        tracing::debug!("fetching {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(body)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.output_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }

    async fn list_implementor_files(&self) -> Result<Vec<String>> {
        tracing::warn!("remote docs roots cannot be listed; configure implementor_files");
        Ok(Vec::new())
    }
}
