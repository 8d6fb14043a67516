//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::ui::{self, dashboard::DashboardState};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::Instant;
use std::{error::Error, io};

/// Runs the application in TUI mode
///
/// The terminal is restored even when the UI loop fails.
pub async fn run_tui_mode(session: SessionData, with_background: bool) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", &session.environment.api_url());

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let state = DashboardState::new(session.environment.clone(), Instant::now(), with_background);
    let app = ui::App::new(
        state,
        session.report_receiver,
        session.cancel.clone(),
        session.poller_config.interval,
    );

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // The UI cancels on a clean exit; make sure an error exit does too
    session.cancel.cancel();
    result?;

    print_session_shutdown();
    if let Err(e) = session.join_handle.await {
        log::warn!("Poller task ended abnormally: {}", e);
    }
    print_session_exit_success();

    Ok(())
}
