//! Dashboard state update logic
//!
//! Reconciles queued cycle reports into the dashboard state

use super::state::DashboardState;

use crate::events::Event;
use crate::workers::CycleReport;

impl DashboardState {
    /// Advance the animation tick and reconcile every queued report.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        while let Some(report) = self.pending_reports.pop_front() {
            self.apply_report(report);
        }
    }

    /// Record a report in the activity log and apply it to the view model.
    pub fn apply_report(&mut self, report: CycleReport) {
        if !self.view.is_active() {
            return;
        }

        let event = Event::from_report(&report, self.classifier());
        self.add_to_activity_log(event);
        self.view.apply(report);
    }

    /// Tear the view down; later reports are dropped.
    pub fn deactivate(&mut self) {
        self.pending_reports.clear();
        self.view.deactivate();
    }
}
