use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::Semaphore;

use crate::application::ports::{BulkLoadRequest, TableStore, TableStoreError};
use crate::domain::TableData;

/// In-memory store for tests.
///
/// With a gate attached, every fetch and load waits for one permit, which
/// lets a test hold jobs in flight and release them one at a time.
#[derive(Default)]
pub struct MockTableStore {
    tables: HashMap<String, TableData>,
    fetch_error: Option<String>,
    load_error: Option<String>,
    gate: Option<Arc<Semaphore>>,
    fetch_calls: AtomicUsize,
    allowed_files: Mutex<Vec<PathBuf>>,
    loads: Mutex<Vec<BulkLoadRequest>>,
}

impl MockTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, name: impl Into<String>, data: TableData) -> Self {
        self.tables.insert(name.into(), data);
        self
    }

    pub fn with_fetch_error(mut self, message: impl Into<String>) -> Self {
        self.fetch_error = Some(message.into());
        self
    }

    pub fn with_load_error(mut self, message: impl Into<String>) -> Self {
        self.load_error = Some(message.into());
        self
    }

    pub fn with_gate(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn allowed_files(&self) -> Vec<PathBuf> {
        self.allowed_files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn loads(&self) -> Vec<BulkLoadRequest> {
        self.loads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn pass_gate(&self) {
        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
    }
}

#[async_trait::async_trait]
impl TableStore for MockTableStore {
    async fn fetch_table(&self, table: &str) -> Result<TableData, TableStoreError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.pass_gate().await;

        if let Some(message) = &self.fetch_error {
            return Err(TableStoreError::QueryFailed(message.clone()));
        }
        self.tables
            .get(table)
            .cloned()
            .ok_or_else(|| TableStoreError::QueryFailed(format!("Table '{table}' doesn't exist")))
    }

    fn allow_local_file(&self, path: &Path) {
        self.allowed_files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_path_buf());
    }

    async fn bulk_load(&self, request: &BulkLoadRequest) -> Result<u64, TableStoreError> {
        self.pass_gate().await;

        if !self.allowed_files().contains(&request.path) {
            return Err(TableStoreError::FileNotAllowed(
                request.path.display().to_string(),
            ));
        }
        self.loads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        if let Some(message) = &self.load_error {
            return Err(TableStoreError::QueryFailed(message.clone()));
        }

        let contents = tokio::fs::read_to_string(&request.path)
            .await
            .map_err(|e| TableStoreError::SourceRead(e.to_string()))?;
        let lines = contents.lines().filter(|line| !line.is_empty()).count();
        let header = usize::from(request.format.has_header);
        Ok(lines.saturating_sub(header) as u64)
    }
}
