//! Loading screen shown until the first refresh cycle resolves.

use crate::environment::Environment;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const LOGO_NAME: &str = r#"
  ██████╗   ██╗  ███████╗  ████████╗
  ██╔══██╗  ██║  ██╔════╝  ╚══██╔══╝
  ██║  ██║  ██║  ███████╗     ██║
  ██║  ██║  ██║  ╚════██║     ██║
  ██████╔╝  ██║  ███████║     ██║
  ╚═════╝   ╚═╝  ╚══════╝     ╚═╝
"#;

pub const LOADING_MESSAGE: &str = "Loading DistributeAI Dashboard...";

pub fn render_loading(f: &mut Frame, environment: &Environment, tick: usize) {
    let mut lines: Vec<Line> = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|line| {
            Span::styled(
                line.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .into()
        })
        .collect();

    lines.push(Line::from(Span::raw(" ")));

    // Dots cycle so a stuck first request is visibly still waiting
    let dots = ".".repeat(tick % 4);
    lines.push(
        Span::styled(
            format!("{}{}", LOADING_MESSAGE.trim_end_matches('.'), dots),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::ITALIC),
        )
        .into(),
    );
    lines.push(
        Span::styled(
            format!("Coordinator: {}", environment.api_url()),
            Style::default().fg(Color::DarkGray),
        )
        .into(),
    );

    let logo_height = (lines.len() + 2) as u16;

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min((f.area().height.saturating_sub(logo_height)) / 2),
            Constraint::Length(logo_height),
            Constraint::Min((f.area().height.saturating_sub(logo_height + 1)) / 2),
        ])
        .split(f.area());

    let centered_area: Rect = vertical_chunks[1];

    let logo = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    f.render_widget(logo, centered_area);
}
