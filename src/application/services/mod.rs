mod job_dispatcher;
mod job_executor;
mod job_status_tracker;
mod process_clock;
mod status_reporter;

pub use job_dispatcher::{JobDispatcher, generate_dump_filename};
pub use job_executor::{JobError, JobExecutor, JobOutcome, TransferPaths};
pub use job_status_tracker::{JobStatusTracker, JobTicket, TrackerSnapshot};
pub use process_clock::ProcessClock;
pub use status_reporter::{StatusReport, StatusReporter};
