//! Error banner component

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// Render the most recent cycle failure. Data below it may be stale.
pub fn render_error_banner(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let Some(error) = state.view.error.as_deref() else {
        return;
    };

    let line = Line::from(vec![
        Span::styled(
            "Error: ",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(error.to_string(), Style::default().fg(Color::LightRed)),
    ]);

    let banner = Paragraph::new(line).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(banner, area);
}
