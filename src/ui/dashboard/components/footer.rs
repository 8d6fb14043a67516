//! Dashboard footer component
//!
//! Renders footer with quit instructions and refresh cadence

use crate::consts::cli_consts::polling::refresh_interval;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect) {
    let footer_text = format!(
        "[Q] Quit | Refreshing every {}s | DistributeAI Network",
        refresh_interval().as_secs()
    );

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
