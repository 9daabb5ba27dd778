use std::sync::Arc;

use uuid::Uuid;

use super::JobExecutor;
use crate::domain::{DumpRequest, ImportRequest, JobDirection};

/// Fresh `<uuid>.csv` name for a dump target.
pub fn generate_dump_filename() -> String {
    format!("{}.csv", Uuid::new_v4())
}

/// Starts jobs in the background and returns straight away.
///
/// The status line is claimed before the task is spawned, so the most
/// recently dispatched job of a direction is always the one that owns it.
/// Nothing is rejected for being busy; a new job simply takes over.
#[derive(Clone)]
pub struct JobDispatcher {
    executor: Arc<JobExecutor>,
}

impl JobDispatcher {
    pub fn new(executor: Arc<JobExecutor>) -> Self {
        Self { executor }
    }

    /// Must be called from within a tokio runtime.
    pub fn dispatch_dump(&self, request: &DumpRequest) -> String {
        let filename = generate_dump_filename();
        let ticket = self.executor.begin(JobDirection::Dump, &filename);
        let executor = Arc::clone(&self.executor);
        let table = request.table.clone();

        tracing::info!(
            table = %table,
            filename = %filename,
            start = request.start,
            total = request.total,
            "Dump dispatched"
        );

        tokio::spawn(async move {
            let _ = executor.run_dump(ticket, &table).await;
        });

        filename
    }

    /// Must be called from within a tokio runtime.
    pub fn dispatch_import(&self, request: &ImportRequest) {
        let ticket = self.executor.begin(JobDirection::Import, &request.file);
        let executor = Arc::clone(&self.executor);
        let table = request.table.clone();

        tracing::info!(table = %table, filename = %request.file, "Import dispatched");

        tokio::spawn(async move {
            let _ = executor.run_import(ticket, &table).await;
        });
    }
}
