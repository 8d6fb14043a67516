//! Dashboard state management
//!
//! Wraps the reconciled view model with the purely presentational state the
//! terminal UI needs.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::error_classifier::ErrorClassifier;
use crate::events::Event;
use crate::view_model::ViewModel;
use crate::workers::CycleReport;

use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug)]
pub struct DashboardState {
    /// Data reconciled from the coordinator.
    pub view: ViewModel,
    /// The coordinator being watched.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Reports received but not yet reconciled
    pub pending_reports: VecDeque<CycleReport>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    classifier: ErrorClassifier,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, with_background_color: bool) -> Self {
        Self {
            view: ViewModel::new(),
            environment,
            start_time,
            pending_reports: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color,
            tick: 0,
            classifier: ErrorClassifier::new(),
        }
    }

    pub fn classifier(&self) -> &ErrorClassifier {
        &self.classifier
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Queue a report for the next update
    pub fn add_report(&mut self, report: CycleReport) {
        self.pending_reports.push_back(report);
    }
}
