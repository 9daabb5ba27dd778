mod helpers;

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::Semaphore;
use uuid::Uuid;

use tablecsv::application::services::{JobDispatcher, generate_dump_filename};
use tablecsv::domain::{DirectionStatus, DumpRequest, ImportRequest, JobDirection};
use tablecsv::infrastructure::csv::MockTableFileWriter;
use tablecsv::infrastructure::persistence::MockTableStore;

use helpers::{TestJobs, USERS_CSV, paths_in, users_table, wait_until, write_import_file};

fn uuid_stem(filename: &str) -> Uuid {
    let stem = filename
        .strip_suffix(".csv")
        .expect("dump file names end with .csv");
    Uuid::parse_str(stem).expect("dump file names are uuids")
}

#[test]
fn given_many_calls_when_generating_filenames_then_all_unique_uuids() {
    let names: HashSet<String> = (0..1000).map(|_| generate_dump_filename()).collect();

    assert_eq!(names.len(), 1000);
    for name in &names {
        uuid_stem(name);
    }
}

#[tokio::test]
async fn given_blocked_store_when_dispatching_dump_then_returns_before_job_completes() {
    let dir = tempfile::TempDir::new().unwrap();
    let gate = Arc::new(Semaphore::new(0));
    let jobs = TestJobs::new(
        MockTableStore::new()
            .with_table("users", users_table())
            .with_gate(Arc::clone(&gate)),
        MockTableFileWriter::new(),
        paths_in(dir.path()),
    );
    let dispatcher = JobDispatcher::new(Arc::clone(&jobs.executor));

    let filename = dispatcher.dispatch_dump(&DumpRequest::new("users"));

    uuid_stem(&filename);
    assert!(jobs.writer.written().is_empty());
    assert_eq!(jobs.tracker.snapshot().dump.to_string(), "Dump in progress!");

    gate.add_permits(1);
    wait_until(|| jobs.tracker.snapshot().dump.is_idle()).await;

    assert_eq!(
        jobs.writer.written_paths(),
        vec![jobs.paths.export_dir.join(&filename)]
    );
}

#[tokio::test]
async fn given_two_dispatches_when_generating_names_then_each_dump_gets_its_own_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let jobs = TestJobs::new(
        MockTableStore::new().with_table("users", users_table()),
        MockTableFileWriter::new(),
        paths_in(dir.path()),
    );
    let dispatcher = JobDispatcher::new(Arc::clone(&jobs.executor));

    let first = dispatcher.dispatch_dump(&DumpRequest::new("users"));
    let second = dispatcher.dispatch_dump(&DumpRequest::new("users"));

    assert_ne!(uuid_stem(&first), uuid_stem(&second));
    wait_until(|| jobs.writer.written().len() == 2).await;
}

// Needs the current-thread runtime: jobs reach the gate in dispatch order and
// permits are handed out FIFO, so each permit releases the oldest job.
#[tokio::test(flavor = "current_thread")]
async fn given_newer_dump_in_flight_when_older_dump_finishes_then_status_stays_in_progress() {
    let dir = tempfile::TempDir::new().unwrap();
    let gate = Arc::new(Semaphore::new(0));
    let jobs = TestJobs::new(
        MockTableStore::new()
            .with_table("users", users_table())
            .with_gate(Arc::clone(&gate)),
        MockTableFileWriter::new(),
        paths_in(dir.path()),
    );
    let dispatcher = JobDispatcher::new(Arc::clone(&jobs.executor));
    let export_dir = jobs.paths.export_dir.clone();

    let first = dispatcher.dispatch_dump(&DumpRequest::new("users"));
    let second = dispatcher.dispatch_dump(&DumpRequest::new("users"));
    wait_until(|| jobs.store.fetch_calls() == 2).await;

    gate.add_permits(1);
    let first_path = export_dir.join(&first);
    wait_until(|| jobs.writer.written_paths().contains(&first_path)).await;

    assert_eq!(
        jobs.tracker.snapshot().dump,
        DirectionStatus::InProgress(JobDirection::Dump)
    );

    gate.add_permits(1);
    let second_path = export_dir.join(&second);
    wait_until(|| jobs.writer.written_paths().contains(&second_path)).await;
    wait_until(|| jobs.tracker.snapshot().dump.is_idle()).await;
}

#[tokio::test]
async fn given_dump_and_import_dispatched_when_both_blocked_then_both_reported_in_progress() {
    let dir = tempfile::TempDir::new().unwrap();
    let gate = Arc::new(Semaphore::new(0));
    let paths = paths_in(dir.path());
    write_import_file(&paths, "users.csv", USERS_CSV);
    let jobs = TestJobs::new(
        MockTableStore::new()
            .with_table("users", users_table())
            .with_gate(Arc::clone(&gate)),
        MockTableFileWriter::new(),
        paths,
    );
    let dispatcher = JobDispatcher::new(Arc::clone(&jobs.executor));

    dispatcher.dispatch_dump(&DumpRequest::new("users"));
    dispatcher.dispatch_import(&ImportRequest::new("users_copy", "users.csv"));

    let snapshot = jobs.tracker.snapshot();
    assert_eq!(snapshot.dump.to_string(), "Dump in progress!");
    assert_eq!(snapshot.import.to_string(), "Import in progress!");

    gate.add_permits(2);
    wait_until(|| {
        let snapshot = jobs.tracker.snapshot();
        snapshot.dump.is_idle() && snapshot.import.is_idle()
    })
    .await;

    let loads = jobs.store.loads();
    assert_eq!(loads.len(), 1);
    assert_eq!(loads[0].table, "users_copy");
    assert!(loads[0].path.ends_with(Path::new("imports/users.csv")));
}
