//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::events::Event as DashboardEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::loading::render_loading;
use crate::workers::CycleReport;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Shown until the first refresh cycle resolves.
    Loading,
    /// Stats, nodes, jobs and activity.
    Dashboard,
}

/// Application state
#[derive(Debug)]
pub struct App {
    state: DashboardState,

    /// Receives reports from refresh cycles.
    report_receiver: mpsc::Receiver<CycleReport>,

    /// Stops the poller when the UI exits.
    cancel: CancellationToken,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        mut state: DashboardState,
        report_receiver: mpsc::Receiver<CycleReport>,
        cancel: CancellationToken,
        interval: Duration,
    ) -> Self {
        let started = DashboardEvent::polling_started(&state.environment.api_url(), interval);
        state.add_to_activity_log(started);
        Self {
            state,
            report_receiver,
            cancel,
        }
    }

    pub fn screen(&self) -> Screen {
        if self.state.view.loading {
            Screen::Loading
        } else {
            Screen::Dashboard
        }
    }

    /// Move every delivered report into the state and reconcile it.
    pub fn drain_reports(&mut self) {
        while let Ok(report) = self.report_receiver.try_recv() {
            self.state.add_report(report);
        }
        self.state.update();
    }

    /// Tear down: stop the poller and stop accepting reports.
    pub fn shutdown(&mut self) {
        self.cancel.cancel();
        self.state.deactivate();
        self.report_receiver.close();
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        // The poller can only stop on its own if the whole session is cancelled
        if app.cancel.is_cancelled() {
            app.shutdown();
            return Ok(());
        }

        app.drain_reports();
        terminal.draw(|f| render(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    app.shutdown();
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Loading => render_loading(f, &app.state.environment, app.state.tick),
        Screen::Dashboard => render_dashboard(f, &app.state),
    }
}
