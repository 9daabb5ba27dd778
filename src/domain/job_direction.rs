use std::fmt;

/// Which half of the service a job belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobDirection {
    Dump,
    Import,
}

impl JobDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobDirection::Dump => "Dump",
            JobDirection::Import => "Import",
        }
    }
}

impl fmt::Display for JobDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
