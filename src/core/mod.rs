pub mod engine;
pub mod host;
pub mod parse;
pub mod pipeline;

pub use crate::domain::model::{
    ImplementorMap, ParsedFile, ScanSummary, SourceFile, SummaryRow,
};
pub use crate::domain::ports::{ConfigProvider, DocStore, Pipeline, Registrar};
pub use crate::utils::error::Result;
