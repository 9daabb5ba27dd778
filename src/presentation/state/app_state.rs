use std::sync::Arc;

use crate::application::services::{JobDispatcher, JobExecutor, ProcessClock, StatusReporter};

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<JobDispatcher>,
    pub reporter: Arc<StatusReporter>,
}

impl AppState {
    /// Wires the dispatcher and the status reporter to the executor's tracker.
    pub fn new(executor: Arc<JobExecutor>, clock: ProcessClock) -> Self {
        let reporter = StatusReporter::new(Arc::clone(executor.tracker()), clock);
        Self {
            dispatcher: Arc::new(JobDispatcher::new(executor)),
            reporter: Arc::new(reporter),
        }
    }
}
