use std::fmt;

use super::JobDirection;

const IDLE: &str = "Idle!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionStatus {
    Idle,
    InProgress(JobDirection),
}

impl DirectionStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, DirectionStatus::Idle)
    }
}

impl fmt::Display for DirectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionStatus::Idle => f.write_str(IDLE),
            DirectionStatus::InProgress(direction) => write!(f, "{} in progress!", direction),
        }
    }
}
