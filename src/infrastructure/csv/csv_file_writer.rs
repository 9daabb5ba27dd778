use std::path::{Path, PathBuf};

use async_trait::async_trait;
use csv::{QuoteStyle, WriterBuilder};

use crate::application::ports::{TableFileError, TableFileWriter};
use crate::domain::{CsvFormat, TableData};

/// Writes dumps to the local filesystem with the `csv` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvFileWriter;

impl CsvFileWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TableFileWriter for CsvFileWriter {
    async fn write_table(
        &self,
        path: &Path,
        table: TableData,
        format: CsvFormat,
    ) -> Result<u64, TableFileError> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || write_blocking(path, table, format))
            .await
            .map_err(|e| TableFileError::Task(e.to_string()))?
    }
}

fn write_blocking(path: PathBuf, table: TableData, format: CsvFormat) -> Result<u64, TableFileError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = WriterBuilder::new()
        .delimiter(format.delimiter)
        .quote(format.quote)
        .quote_style(QuoteStyle::Necessary)
        .from_path(&path)
        .map_err(into_file_error)?;

    if format.has_header {
        writer
            .write_record(&table.columns)
            .map_err(into_file_error)?;
    }

    let mut written = 0u64;
    for row in &table.rows {
        writer.write_record(row).map_err(into_file_error)?;
        written += 1;
    }
    writer.flush()?;

    Ok(written)
}

fn into_file_error(error: csv::Error) -> TableFileError {
    if error.is_io_error() {
        match error.into_kind() {
            csv::ErrorKind::Io(io) => TableFileError::Io(io),
            other => TableFileError::Encoding(format!("{other:?}")),
        }
    } else {
        TableFileError::Encoding(error.to_string())
    }
}
