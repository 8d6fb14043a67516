//! Session setup and initialization

use crate::coordinator::{Coordinator, CoordinatorClient};
use crate::environment::Environment;
use crate::runtime::start_poller;
use crate::workers::{CycleReport, PollerConfig};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Reports from refresh cycles
    pub report_receiver: mpsc::Receiver<CycleReport>,
    /// Join handle for the poller task
    pub join_handle: JoinHandle<()>,
    /// Cancelling stops the poller and any in-flight cycle
    pub cancel: CancellationToken,
    /// Coordinator being watched
    pub environment: Environment,
    /// Refresh cadence
    pub poller_config: PollerConfig,
}

/// Sets up a polling session
///
/// Builds the coordinator client and starts the poller. The first cycle
/// starts immediately.
pub fn setup_session(
    environment: Environment,
    poller_config: PollerConfig,
) -> Result<SessionData, Box<dyn Error>> {
    let client = CoordinatorClient::new(environment)?;
    let environment = client.environment().clone();
    Ok(setup_session_with(
        Arc::new(client),
        environment,
        poller_config,
    ))
}

/// Starts a session against any coordinator implementation.
pub fn setup_session_with(
    coordinator: Arc<dyn Coordinator>,
    environment: Environment,
    poller_config: PollerConfig,
) -> SessionData {
    let cancel = CancellationToken::new();
    let (report_receiver, join_handle) =
        start_poller(coordinator, poller_config.clone(), cancel.clone());

    SessionData {
        report_receiver,
        join_handle,
        cancel,
        environment,
        poller_config,
    }
}
