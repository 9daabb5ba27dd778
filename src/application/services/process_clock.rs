use std::time::{Duration, Instant};

/// Start time of the process, captured once.
#[derive(Debug, Clone, Copy)]
pub struct ProcessClock {
    started_at: Instant,
}

impl ProcessClock {
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Clock that started at a known instant, e.g. one captured before startup work.
    pub fn started_at(started_at: Instant) -> Self {
        Self { started_at }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
