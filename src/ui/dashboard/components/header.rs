//! Dashboard header component
//!
//! Renders the title and the refresh status line

use super::super::state::DashboardState;
use super::super::utils::{format_last_update, format_uptime};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Render the header with title, coordinator address and last refresh.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title = Paragraph::new(format!(
        "DISTRIBUTEAI DASHBOARD v{}",
        env!("CARGO_PKG_VERSION")
    ))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    let view = &state.view;
    let (status_text, status_color) = match (view.error.is_some(), view.has_data()) {
        (false, _) => ("LIVE", Color::LightGreen),
        (true, true) => ("STALE", Color::LightYellow),
        (true, false) => ("OFFLINE", Color::LightRed),
    };
    let spinner = SPINNER[state.tick % SPINNER.len()];

    let subtitle = Line::from(vec![
        Span::styled(
            format!("{} {} ", spinner, status_text),
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{}  ", state.environment.api_url()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!(
                "Last updated: {}  ",
                format_last_update(view.last_update.as_ref())
            ),
            Style::default().fg(Color::LightBlue),
        ),
        Span::styled(
            format!("Uptime: {}", format_uptime(state.start_time.elapsed())),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let status = Paragraph::new(subtitle).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(status, header_chunks[1]);
}
