use serde::{Deserialize, Serialize};

/// Status of a background merge job, as polled by clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Pending,
    /// Percentage of records rendered so far.
    InProgress(u32),
    /// Number of documents generated.
    Completed(usize),
    Failed(String),
}

impl JobStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, JobStatus::Completed(_) | JobStatus::Failed(_))
    }
}
