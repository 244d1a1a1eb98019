use crate::domain::model::{ImplementorMap, ParsedFile, SourceFile};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The host-supplied registration capability. Registration is synchronous
/// and infallible; whatever the host does with the mapping is its own
/// concern and any result is discarded.
pub trait Registrar: Send + Sync {
    fn register(&self, map: ImplementorMap);
}

pub trait DocStore: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<String>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Paths of the implementor files this store can see, relative to its
    /// root. Stores with no listing capability return the configured list.
    fn list_implementor_files(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn doc_root(&self) -> &str;
    fn output_path(&self) -> &str;
    fn implementor_files(&self) -> &[String];
    /// Strict mode aborts the scan on the first malformed file instead of
    /// skipping it.
    fn strict(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn collect(&self) -> Result<Vec<SourceFile>>;
    async fn parse(&self, files: Vec<SourceFile>) -> Result<Vec<ParsedFile>>;
    async fn publish(&self, parsed: Vec<ParsedFile>) -> Result<String>;
}
