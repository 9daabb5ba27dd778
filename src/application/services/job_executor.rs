use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::Instrument;

use super::{JobStatusTracker, JobTicket};
use crate::application::ports::{
    BulkLoadRequest, TableFileError, TableFileWriter, TableStore, TableStoreError,
};
use crate::domain::{CsvFormat, JobDirection, short_duration};

/// Where dumps are written and imports are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPaths {
    pub export_dir: PathBuf,
    pub import_dir: PathBuf,
}

impl TransferPaths {
    pub fn new(export_dir: impl Into<PathBuf>, import_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
            import_dir: import_dir.into(),
        }
    }

    /// Directory holding the running executable, the default import location.
    pub fn executable_dir() -> io::Result<PathBuf> {
        let exe = std::env::current_exe()?;
        exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "executable has no parent directory")
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobOutcome {
    pub rows: u64,
    pub elapsed: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("reading table: {0}")]
    Fetch(TableStoreError),
    #[error("writing dump file: {0}")]
    Write(TableFileError),
    #[error("invalid import file name: {0}")]
    InvalidFileName(String),
    #[error("import file not found: {}", .0.display())]
    SourceFileMissing(PathBuf),
    #[error("loading table: {0}")]
    Load(TableStoreError),
}

/// Runs single dump and import jobs and keeps the status tracker in step
/// with them.
///
/// A failing job is logged, recorded as the direction's last error and its
/// status line released; it never takes the process down.
pub struct JobExecutor {
    table_store: Arc<dyn TableStore>,
    file_writer: Arc<dyn TableFileWriter>,
    tracker: Arc<JobStatusTracker>,
    paths: TransferPaths,
    format: CsvFormat,
}

impl JobExecutor {
    pub fn new(
        table_store: Arc<dyn TableStore>,
        file_writer: Arc<dyn TableFileWriter>,
        tracker: Arc<JobStatusTracker>,
        paths: TransferPaths,
    ) -> Self {
        Self {
            table_store,
            file_writer,
            tracker,
            paths,
            format: CsvFormat::default(),
        }
    }

    pub fn tracker(&self) -> &Arc<JobStatusTracker> {
        &self.tracker
    }

    pub fn begin(&self, direction: JobDirection, filename: &str) -> JobTicket {
        self.tracker.begin(direction, filename)
    }

    /// Dumps `table` into `filename` and waits for the result.
    pub async fn dump(&self, table: &str, filename: &str) -> Result<JobOutcome, JobError> {
        let ticket = self.begin(JobDirection::Dump, filename);
        self.run_dump(ticket, table).await
    }

    /// Imports `filename` into `table` and waits for the result.
    pub async fn import(&self, table: &str, filename: &str) -> Result<JobOutcome, JobError> {
        let ticket = self.begin(JobDirection::Import, filename);
        self.run_import(ticket, table).await
    }

    pub async fn run_dump(&self, ticket: JobTicket, table: &str) -> Result<JobOutcome, JobError> {
        let span = tracing::info_span!(
            "dump_job",
            table = %table,
            filename = %ticket.filename,
        );
        async {
            let started = Instant::now();
            tracing::info!("Starting export");
            let result = self.export_table(table, &ticket.filename).await;
            self.finish(&ticket, started, result)
        }
        .instrument(span)
        .await
    }

    pub async fn run_import(
        &self,
        ticket: JobTicket,
        table: &str,
    ) -> Result<JobOutcome, JobError> {
        let span = tracing::info_span!(
            "import_job",
            table = %table,
            filename = %ticket.filename,
        );
        async {
            let started = Instant::now();
            tracing::info!("Starting import");
            let result = self.import_file(table, &ticket.filename).await;
            self.finish(&ticket, started, result)
        }
        .instrument(span)
        .await
    }

    async fn export_table(&self, table: &str, filename: &str) -> Result<u64, JobError> {
        let data = self
            .table_store
            .fetch_table(table)
            .await
            .map_err(JobError::Fetch)?;

        let path = self.paths.export_dir.join(filename);
        tracing::debug!(
            path = %path.display(),
            columns = data.columns.len(),
            rows = data.row_count(),
            "Writing dump file"
        );

        self.file_writer
            .write_table(&path, data, self.format)
            .await
            .map_err(JobError::Write)
    }

    async fn import_file(&self, table: &str, filename: &str) -> Result<u64, JobError> {
        let path = resolve_import_path(&self.paths.import_dir, filename)?;

        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {}
            _ => return Err(JobError::SourceFileMissing(path)),
        }

        self.table_store.allow_local_file(&path);
        tracing::debug!(path = %path.display(), "Loading file");

        let request = BulkLoadRequest {
            path,
            table: table.to_string(),
            format: self.format,
        };
        self.table_store
            .bulk_load(&request)
            .await
            .map_err(JobError::Load)
    }

    fn finish(
        &self,
        ticket: &JobTicket,
        started: Instant,
        result: Result<u64, JobError>,
    ) -> Result<JobOutcome, JobError> {
        let elapsed = started.elapsed();
        match result {
            Ok(rows) => {
                let released = self.tracker.end_if_owner(ticket);
                tracing::info!(
                    rows,
                    elapsed = %short_duration(elapsed),
                    released,
                    "{} finished",
                    ticket.direction
                );
                Ok(JobOutcome { rows, elapsed })
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    elapsed = %short_duration(elapsed),
                    "{} failed",
                    ticket.direction
                );
                self.tracker.fail_if_owner(ticket, e.to_string());
                Err(e)
            }
        }
    }
}

/// Joins `filename` onto the import directory, refusing anything that could
/// point outside it.
fn resolve_import_path(import_dir: &Path, filename: &str) -> Result<PathBuf, JobError> {
    let mut resolved = import_dir.to_path_buf();
    let mut has_name = false;

    for component in Path::new(filename).components() {
        match component {
            Component::Normal(part) => {
                resolved.push(part);
                has_name = true;
            }
            Component::CurDir => {}
            _ => return Err(JobError::InvalidFileName(filename.to_string())),
        }
    }

    if !has_name {
        return Err(JobError::InvalidFileName(filename.to_string()));
    }
    Ok(resolved)
}
