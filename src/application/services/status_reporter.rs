use std::sync::Arc;

use serde::Serialize;

use super::{JobStatusTracker, ProcessClock};
use crate::domain::short_duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusReport {
    pub dump_status: String,
    pub import_status: String,
    pub uptime: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dump_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_error: Option<String>,
}

pub struct StatusReporter {
    tracker: Arc<JobStatusTracker>,
    clock: ProcessClock,
}

impl StatusReporter {
    pub fn new(tracker: Arc<JobStatusTracker>, clock: ProcessClock) -> Self {
        Self { tracker, clock }
    }

    pub fn report(&self) -> StatusReport {
        let snapshot = self.tracker.snapshot();
        StatusReport {
            dump_status: snapshot.dump.to_string(),
            import_status: snapshot.import.to_string(),
            uptime: short_duration(self.clock.uptime()),
            dump_error: snapshot.dump_error,
            import_error: snapshot.import_error,
        }
    }
}
