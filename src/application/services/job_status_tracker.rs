use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{DirectionStatus, JobDirection};

/// Proof that a job claimed its direction's status line. Only the most
/// recently issued ticket of a direction may reset that direction to idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTicket {
    pub direction: JobDirection,
    pub filename: String,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSnapshot {
    pub dump: DirectionStatus,
    pub import: DirectionStatus,
    pub dump_error: Option<String>,
    pub import_error: Option<String>,
}

#[derive(Debug, Default)]
struct DirectionSlot {
    owner: Option<(String, u64)>,
    last_error: Option<String>,
}

impl DirectionSlot {
    fn owned_by(&self, ticket: &JobTicket) -> bool {
        matches!(&self.owner, Some((_, generation)) if *generation == ticket.generation)
    }

    fn status(&self, direction: JobDirection) -> DirectionStatus {
        match self.owner {
            Some(_) => DirectionStatus::InProgress(direction),
            None => DirectionStatus::Idle,
        }
    }
}

/// Process-wide record of what each direction is doing.
///
/// Each direction has its own lock, so a dump finishing never touches the
/// import slot. Locks are held only for field copies and never across an
/// `.await`.
#[derive(Debug, Default)]
pub struct JobStatusTracker {
    dump: RwLock<DirectionSlot>,
    import: RwLock<DirectionSlot>,
    next_generation: AtomicU64,
}

impl JobStatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, direction: JobDirection, filename: impl Into<String>) -> JobTicket {
        let filename = filename.into();
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);

        let mut slot = self.write(direction);
        if let Some((previous, _)) = &slot.owner {
            tracing::debug!(
                direction = %direction,
                previous = %previous,
                filename = %filename,
                "Taking over status line from in-flight job"
            );
        }
        slot.owner = Some((filename.clone(), generation));
        slot.last_error = None;

        JobTicket {
            direction,
            filename,
            generation,
        }
    }

    /// Resets the ticket's direction to idle if the ticket still owns it.
    pub fn end_if_owner(&self, ticket: &JobTicket) -> bool {
        self.release(ticket, None)
    }

    /// Like [`end_if_owner`](Self::end_if_owner), also recording `error` as
    /// the direction's last failure.
    pub fn fail_if_owner(&self, ticket: &JobTicket, error: impl Into<String>) -> bool {
        self.release(ticket, Some(error.into()))
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        let dump = self.read(JobDirection::Dump);
        let import = self.read(JobDirection::Import);
        TrackerSnapshot {
            dump: dump.status(JobDirection::Dump),
            import: import.status(JobDirection::Import),
            dump_error: dump.last_error.clone(),
            import_error: import.last_error.clone(),
        }
    }

    fn release(&self, ticket: &JobTicket, error: Option<String>) -> bool {
        let mut slot = self.write(ticket.direction);
        if !slot.owned_by(ticket) {
            tracing::debug!(
                direction = %ticket.direction,
                filename = %ticket.filename,
                "Newer job owns the status line, leaving it untouched"
            );
            return false;
        }
        slot.owner = None;
        slot.last_error = error;
        true
    }

    fn slot(&self, direction: JobDirection) -> &RwLock<DirectionSlot> {
        match direction {
            JobDirection::Dump => &self.dump,
            JobDirection::Import => &self.import,
        }
    }

    fn read(&self, direction: JobDirection) -> RwLockReadGuard<'_, DirectionSlot> {
        self.slot(direction)
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self, direction: JobDirection) -> RwLockWriteGuard<'_, DirectionSlot> {
        self.slot(direction)
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
