use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::application::ports::{TableFileError, TableFileWriter};
use crate::domain::{CsvFormat, TableData};

/// Records what would have been written instead of touching the disk.
#[derive(Default)]
pub struct MockTableFileWriter {
    error: Option<String>,
    written: Mutex<Vec<(PathBuf, TableData)>>,
}

impl MockTableFileWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn written(&self) -> Vec<(PathBuf, TableData)> {
        self.written
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.written().into_iter().map(|(path, _)| path).collect()
    }
}

#[async_trait::async_trait]
impl TableFileWriter for MockTableFileWriter {
    async fn write_table(
        &self,
        path: &Path,
        table: TableData,
        _format: CsvFormat,
    ) -> Result<u64, TableFileError> {
        if let Some(message) = &self.error {
            return Err(TableFileError::Io(std::io::Error::other(message.clone())));
        }
        let rows = table.row_count();
        self.written
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((path.to_path_buf(), table));
        Ok(rows)
    }
}
