//! Reconciled snapshot read by the render layer
//!
//! The view model is owned by a single task and changes only when a
//! [`CycleReport`] is applied. A successful report replaces stats, nodes and
//! jobs together. A failed report only sets the error; the last good data stays.

use crate::consts::cli_consts::display::RECENT_JOBS_LIMIT;
use crate::coordinator::types::{Job, Node, Stats};
use crate::workers::CycleReport;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    /// Absent until the first successful cycle.
    pub stats: Option<Stats>,
    /// In coordinator order.
    pub nodes: Vec<Node>,
    /// In coordinator order.
    pub jobs: Vec<Job>,
    /// True until the first cycle resolves, whichever way.
    pub loading: bool,
    /// Message of the most recent failed cycle, cleared by the next success.
    pub error: Option<String>,
    /// When the most recent successful cycle finished.
    pub last_update: Option<DateTime<Local>>,
    /// Cycle number of the report that produced the current data.
    pub data_cycle: Option<u64>,
    active: bool,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self {
            stats: None,
            nodes: Vec::new(),
            jobs: Vec::new(),
            loading: true,
            error: None,
            last_update: None,
            data_cycle: None,
            active: true,
        }
    }
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile one cycle into the view.
    ///
    /// Reports are applied in arrival order, so when overlapping cycles resolve
    /// out of order the one that completes last wins. Returns false if the
    /// view was already torn down and the report was ignored.
    pub fn apply(&mut self, report: CycleReport) -> bool {
        if !self.active {
            return false;
        }

        match report.outcome {
            Ok(snapshot) => {
                self.stats = Some(snapshot.stats);
                self.nodes = snapshot.nodes;
                self.jobs = snapshot.jobs;
                self.error = None;
                self.last_update = Some(report.finished_at);
                self.data_cycle = Some(report.cycle);
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
        true
    }

    /// Stop accepting reports. Called when the view is torn down.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The jobs handed to the job list renderer.
    pub fn recent_jobs(&self) -> &[Job] {
        let end = self.jobs.len().min(RECENT_JOBS_LIMIT);
        &self.jobs[..end]
    }

    /// Total number of jobs, for the count badge.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True once at least one cycle has succeeded.
    pub fn has_data(&self) -> bool {
        self.stats.is_some()
    }
}
