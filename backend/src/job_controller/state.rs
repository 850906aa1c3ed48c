//! Shared state of background merge jobs.
//!
//! Workers never write the job map themselves. They push [`JobUpdate`]s into
//! an MPSC channel and [`start_job_updater`] applies them in arrival order, so
//! a job's final status can never be overwritten by a late progress report
//! sent from the same worker.
//!
//! Rendered documents are kept in `results` under the job id. A worker stores
//! them before reporting `Completed`, so a client that sees a completed job
//! can always fetch its output. Only the most recent results are retained;
//! older jobs are forgotten entirely, status included.

use common::jobs::JobStatus;
use log::debug;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

/// Capacity of the update channel between workers and the updater task.
pub const UPDATE_BUFFER: usize = 100;

#[derive(Clone)]
pub struct JobsState {
    /// Job id to its latest status. Read by the status endpoint, written only
    /// by [`start_job_updater`] and by job registration.
    pub jobs: Arc<RwLock<HashMap<String, JobStatus>>>,

    /// Rendered documents of completed merges, in record order.
    pub results: Arc<RwLock<MergeResults>>,

    pub tx: mpsc::Sender<JobUpdate>,
}

impl JobsState {
    /// Empty state plus the receiving end that [`start_job_updater`] drains.
    pub fn new() -> (Self, mpsc::Receiver<JobUpdate>) {
        let (tx, rx) = mpsc::channel(UPDATE_BUFFER);
        let state = Self {
            jobs: Arc::new(RwLock::new(HashMap::new())),
            results: Arc::new(RwLock::new(MergeResults::default())),
            tx,
        };
        (state, rx)
    }

    /// Registers a new job as `Pending` and returns its id.
    pub async fn register(&self) -> String {
        let job_id = uuid::Uuid::new_v4().to_string();
        self.jobs
            .write()
            .await
            .insert(job_id.clone(), JobStatus::Pending);
        job_id
    }

    /// Stores the documents of a completed job, forgetting the oldest jobs
    /// beyond `keep`.
    pub async fn store_results(&self, job_id: String, documents: Vec<String>, keep: usize) {
        let evicted = self.results.write().await.insert(job_id, documents, keep);
        if evicted.is_empty() {
            return;
        }
        let mut jobs = self.jobs.write().await;
        for job_id in evicted {
            debug!("evicting results of merge job {}", job_id);
            jobs.remove(&job_id);
        }
    }

    /// Forgets a finished job and its documents.
    pub async fn discard(&self, job_id: &str) -> Discard {
        let mut jobs = self.jobs.write().await;
        let finished = match jobs.get(job_id) {
            Some(status) => status.is_finished(),
            None => return Discard::Unknown,
        };
        if !finished {
            return Discard::Running;
        }
        jobs.remove(job_id);
        self.results.write().await.remove(job_id);
        Discard::Removed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discard {
    Removed,
    Running,
    Unknown,
}

/// Documents of completed merges, oldest first.
#[derive(Debug, Default)]
pub struct MergeResults {
    order: VecDeque<String>,
    documents: HashMap<String, Vec<String>>,
}

impl MergeResults {
    pub fn get(&self, job_id: &str) -> Option<&Vec<String>> {
        self.documents.get(job_id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Inserts `documents` and returns the ids evicted to stay within `keep`
    /// entries (at least one is always kept).
    pub fn insert(&mut self, job_id: String, documents: Vec<String>, keep: usize) -> Vec<String> {
        if self.documents.insert(job_id.clone(), documents).is_none() {
            self.order.push_back(job_id);
        }
        let mut evicted = Vec::new();
        while self.order.len() > keep.max(1) {
            if let Some(oldest) = self.order.pop_front() {
                self.documents.remove(&oldest);
                evicted.push(oldest);
            }
        }
        evicted
    }

    pub fn remove(&mut self, job_id: &str) -> bool {
        self.order.retain(|id| id != job_id);
        self.documents.remove(job_id).is_some()
    }
}

#[derive(Debug)]
pub struct JobUpdate {
    pub(crate) job_id: String,
    pub(crate) status: JobStatus,
}

/// Applies job updates until every sender is gone. Updates for jobs that are
/// no longer registered (discarded or evicted) are dropped.
pub async fn start_job_updater(state: JobsState, mut rx: mpsc::Receiver<JobUpdate>) {
    while let Some(update) = rx.recv().await {
        let mut jobs = state.jobs.write().await;
        match jobs.get_mut(&update.job_id) {
            Some(status) => *status = update.status,
            None => debug!("dropping update for forgotten job {}", update.job_id),
        }
    }
}
