use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::{CsvFormat, TableData};

/// File side of a dump.
#[async_trait]
pub trait TableFileWriter: Send + Sync {
    /// Writes `table` to `path`, header first, returning the number of data
    /// rows written.
    async fn write_table(
        &self,
        path: &Path,
        table: TableData,
        format: CsvFormat,
    ) -> Result<u64, TableFileError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TableFileError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("csv encoding failed: {0}")]
    Encoding(String),
    #[error("writer task failed: {0}")]
    Task(String),
}
