use crate::core::host::HostContext;
use crate::core::parse::{has_dispatch_tail, parse_implementors_js};
use crate::core::{ConfigProvider, DocStore, ParsedFile, Pipeline, ScanSummary, SourceFile, SummaryRow};
use crate::utils::error::{RegistryError, Result};
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Collects implementor files from a store, parses each mapping and hands
/// it to the shared host context, then writes summary reports.
pub struct ScanPipeline<S: DocStore, C: ConfigProvider> {
    store: S,
    config: C,
    host: Arc<Mutex<HostContext>>,
}

impl<S: DocStore, C: ConfigProvider> ScanPipeline<S, C> {
    pub fn new(store: S, config: C, host: Arc<Mutex<HostContext>>) -> Self {
        Self {
            store,
            config,
            host,
        }
    }

    fn summary_of(parsed: &[ParsedFile]) -> ScanSummary {
        let mut rows = Vec::new();
        let mut crates = HashSet::new();
        let mut implementors = 0;

        for file in parsed {
            for (crate_name, descriptors) in file.map.iter() {
                crates.insert(crate_name.to_string());
                implementors += descriptors.len();
                rows.push(SummaryRow {
                    file: file.path.clone(),
                    crate_name: crate_name.to_string(),
                    implementor_count: descriptors.len(),
                });
            }
        }

        ScanSummary {
            generated_at: Utc::now(),
            files: parsed.len(),
            crates: crates.len(),
            implementors,
            rows,
        }
    }

    fn delimited_report(summary: &ScanSummary, delimiter: u8) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(Vec::new());
        for row in &summary.rows {
            writer.serialize(row)?;
        }
        writer
            .into_inner()
            .map_err(|e| RegistryError::ProcessingError {
                message: format!("failed to flush report: {}", e),
            })
    }
}

#[async_trait::async_trait]
impl<S: DocStore, C: ConfigProvider> Pipeline for ScanPipeline<S, C> {
    async fn collect(&self) -> Result<Vec<SourceFile>> {
        let paths = if self.config.implementor_files().is_empty() {
            self.store.list_implementor_files().await?
        } else {
            self.config.implementor_files().to_vec()
        };

        tracing::debug!("collecting {} implementor files", paths.len());

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let contents = self.store.read_file(&path).await?;
            files.push(SourceFile { path, contents });
        }

        if files.is_empty() {
            tracing::warn!("no implementor files found under {}", self.config.doc_root());
        }

        Ok(files)
    }

    async fn parse(&self, files: Vec<SourceFile>) -> Result<Vec<ParsedFile>> {
        let mut parsed = Vec::with_capacity(files.len());
        let mut skipped = 0usize;

        for file in files {
            if !has_dispatch_tail(&file.contents) {
                tracing::warn!(
                    "{}: missing register_implementors dispatch tail; generator drift?",
                    file.path
                );
            }

            match parse_implementors_js(&file.path, &file.contents) {
                Ok(map) => {
                    tracing::debug!(
                        "{}: {} crates, {} implementors",
                        file.path,
                        map.len(),
                        map.implementor_count()
                    );
                    parsed.push(ParsedFile {
                        path: file.path,
                        map,
                    });
                }
                Err(e) if self.config.strict() => return Err(e),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", file.path, e);
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            tracing::warn!("skipped {} malformed implementor files", skipped);
        }

        Ok(parsed)
    }

    async fn publish(&self, parsed: Vec<ParsedFile>) -> Result<String> {
        let summary = Self::summary_of(&parsed);

        // File order here, so with no registrar bound the pending slot ends
        // up holding the last file's mapping.
        {
            let mut host = self.host.lock().await;
            for file in parsed {
                host.publish(file.map);
            }
        }

        let csv_report = Self::delimited_report(&summary, b',')?;
        self.store.write_file("summary.csv", &csv_report).await?;

        let tsv_report = Self::delimited_report(&summary, b'\t')?;
        self.store.write_file("summary.tsv", &tsv_report).await?;

        let json_report = serde_json::to_vec_pretty(&summary)?;
        self.store.write_file("summary.json", &json_report).await?;

        tracing::debug!(
            "published {} files ({} crates, {} implementors)",
            summary.files,
            summary.crates,
            summary.implementors
        );

        Ok(self.config.output_path().to_string())
    }
}
