//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::error_classifier::ErrorClassifier;
use crate::events::Event;
use crate::ui::dashboard::utils::format_last_update;
use crate::view_model::ViewModel;
use crate::workers::CycleReport;
use std::error::Error;
use std::future::Future;
use std::io::{self, Write};

/// Runs the application in headless mode
///
/// Prints one line per cycle and a summary after each success until Ctrl+C.
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment.api_url());

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };
    run_until(session, shutdown, &mut io::stdout()).await?;

    print_session_exit_success();
    Ok(())
}

/// Print reports to `out` until `shutdown` resolves or the poller stops.
async fn run_until<W: Write>(
    mut session: SessionData,
    shutdown: impl Future<Output = ()>,
    out: &mut W,
) -> io::Result<ViewModel> {
    let classifier = ErrorClassifier::new();
    let mut view = ViewModel::new();

    writeln!(
        out,
        "{}",
        Event::polling_started(
            &session.environment.api_url(),
            session.poller_config.interval
        )
    )?;

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            report = session.report_receiver.recv() => {
                let Some(report) = report else { break };
                for line in report_lines(&mut view, &classifier, report) {
                    writeln!(out, "{}", line)?;
                }
            }
        }
    }

    print_session_shutdown();
    session.cancel.cancel();
    view.deactivate();
    if let Err(e) = session.join_handle.await {
        log::warn!("Poller task ended abnormally: {}", e);
    }
    Ok(view)
}

/// Apply a report and return the lines to print for it.
fn report_lines(view: &mut ViewModel, classifier: &ErrorClassifier, report: CycleReport) -> Vec<String> {
    let event = Event::from_report(&report, classifier);

    let mut lines = Vec::new();
    if event.should_display() {
        lines.push(event.to_string());
    }
    let succeeded = report.is_success();
    if view.apply(report) && succeeded {
        lines.push(summary_line(view));
    }
    lines
}

/// One-line overview of the current view.
fn summary_line(view: &ViewModel) -> String {
    let (online, running) = view
        .stats
        .as_ref()
        .map(|stats| (stats.nodes.online, stats.jobs.running))
        .unwrap_or_default();
    format!(
        "  {} nodes ({} online), {} jobs ({} running) | last updated {}",
        view.node_count(),
        online,
        view.job_count(),
        running,
        format_last_update(view.last_update.as_ref())
    )
}
