#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tablecsv::application::services::{JobExecutor, JobStatusTracker, TransferPaths};
use tablecsv::domain::TableData;
use tablecsv::infrastructure::csv::MockTableFileWriter;
use tablecsv::infrastructure::persistence::MockTableStore;

pub const USERS_CSV: &str = "id,name\n1,\"Ada\"\n2,\"Grace\"\n";

pub struct TestJobs {
    pub store: Arc<MockTableStore>,
    pub writer: Arc<MockTableFileWriter>,
    pub tracker: Arc<JobStatusTracker>,
    pub executor: Arc<JobExecutor>,
    pub paths: TransferPaths,
}

impl TestJobs {
    pub fn new(store: MockTableStore, writer: MockTableFileWriter, paths: TransferPaths) -> Self {
        let store = Arc::new(store);
        let writer = Arc::new(writer);
        let tracker = Arc::new(JobStatusTracker::new());
        let executor = Arc::new(JobExecutor::new(
            store.clone(),
            writer.clone(),
            Arc::clone(&tracker),
            paths.clone(),
        ));
        Self {
            store,
            writer,
            tracker,
            executor,
            paths,
        }
    }
}

pub fn users_table() -> TableData {
    TableData::new(
        vec!["id".to_string(), "name".to_string()],
        vec![
            vec!["1".to_string(), "Ada".to_string()],
            vec!["2".to_string(), "Grace".to_string()],
        ],
    )
}

pub fn paths_in(dir: &Path) -> TransferPaths {
    TransferPaths::new(dir.join("exports"), dir.join("imports"))
}

pub fn write_import_file(paths: &TransferPaths, name: &str, contents: &str) {
    std::fs::create_dir_all(&paths.import_dir).unwrap();
    std::fs::write(paths.import_dir.join(name), contents).unwrap();
}

/// Polls `condition` until it holds, failing the test after five seconds.
pub async fn wait_until<F: Fn() -> bool>(condition: F) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while !condition() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "condition not met within five seconds"
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
