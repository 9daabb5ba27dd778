use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::TableStoreError;
use crate::domain::{CsvFormat, TableData};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkLoadRequest {
    pub path: PathBuf,
    pub table: String,
    pub format: CsvFormat,
}

/// Database side of a transfer.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Reads every row of `table`.
    async fn fetch_table(&self, table: &str) -> Result<TableData, TableStoreError>;

    /// Adds `path` to the set of local files `bulk_load` may read.
    fn allow_local_file(&self, path: &Path);

    /// Loads a delimited file into a table, returning the number of rows
    /// inserted. Files that were not allowed first are refused.
    async fn bulk_load(&self, request: &BulkLoadRequest) -> Result<u64, TableStoreError>;
}
