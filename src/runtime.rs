//! Simplified runtime for starting the poller

use crate::consts::cli_consts::REPORT_QUEUE_SIZE;
use crate::coordinator::Coordinator;
use crate::workers::{CycleReport, Poller, PollerConfig, ReportSender};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Start the poller on its own task.
///
/// Cancelling `cancel` stops the schedule and drops any report that has not
/// been delivered yet.
pub fn start_poller(
    coordinator: Arc<dyn Coordinator>,
    config: PollerConfig,
    cancel: CancellationToken,
) -> (mpsc::Receiver<CycleReport>, JoinHandle<()>) {
    let (report_sender, report_receiver) = mpsc::channel::<CycleReport>(REPORT_QUEUE_SIZE);

    let poller = Poller::new(
        coordinator,
        config,
        ReportSender::new(report_sender, cancel.clone()),
        cancel,
    );

    let join_handle = tokio::spawn(poller.run());
    (report_receiver, join_handle)
}
