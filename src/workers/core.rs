//! Core worker utilities

use super::poller::CycleReport;
use crate::consts::cli_consts::polling;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Delivers cycle reports to the state owner.
///
/// Once the token is cancelled no report is delivered, so a cycle that resolves
/// after teardown never reaches the view.
#[derive(Clone)]
pub struct ReportSender {
    sender: mpsc::Sender<CycleReport>,
    cancel: CancellationToken,
}

impl ReportSender {
    pub fn new(sender: mpsc::Sender<CycleReport>, cancel: CancellationToken) -> Self {
        Self { sender, cancel }
    }

    /// Send a report; returns false if it was dropped because polling stopped.
    pub async fn send_report(&self, report: CycleReport) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => false,
            sent = self.sender.send(report) => sent.is_ok(),
        }
    }
}

/// Poller configuration
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Time between the starts of two cycles.
    pub interval: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: polling::refresh_interval(),
        }
    }
}
