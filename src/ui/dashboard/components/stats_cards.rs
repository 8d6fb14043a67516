//! Dashboard stats cards
//!
//! Renders the four aggregate cards: nodes, compute, jobs, and outcomes

use super::super::state::DashboardState;
use crate::coordinator::types::Stats;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// One card's title, headline value and detail line.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: &'static str,
    pub value: String,
    pub detail: String,
    pub color: Color,
}

/// Build the cards from the latest stats. Placeholders are shown before the
/// first successful refresh.
pub fn build_cards(stats: Option<&Stats>) -> [Card; 4] {
    let Some(stats) = stats else {
        return [
            placeholder("NODES", Color::LightBlue),
            placeholder("COMPUTE", Color::LightCyan),
            placeholder("JOBS", Color::LightYellow),
            placeholder("OUTCOMES", Color::LightGreen),
        ];
    };

    [
        Card {
            title: "NODES",
            value: stats.nodes.total.to_string(),
            detail: format!("{} online, {} busy", stats.nodes.online, stats.nodes.busy),
            color: Color::LightBlue,
        },
        Card {
            title: "COMPUTE",
            value: format!("{} cores", stats.resources.total_cpu_cores),
            detail: format!("{:.1} GB memory", stats.resources.total_memory_gb),
            color: Color::LightCyan,
        },
        Card {
            title: "JOBS",
            value: stats.jobs.total.to_string(),
            detail: format!("{} running", stats.jobs.running),
            color: Color::LightYellow,
        },
        Card {
            title: "OUTCOMES",
            value: format!("{} completed", stats.jobs.completed),
            detail: format!("{} failed", stats.jobs.failed),
            color: Color::LightGreen,
        },
    ]
}

fn placeholder(title: &'static str, color: Color) -> Card {
    Card {
        title,
        value: "-".to_string(),
        detail: String::new(),
        color,
    }
}

pub fn render_stats_cards(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (card, chunk) in build_cards(state.view.stats.as_ref())
        .into_iter()
        .zip(card_chunks.iter())
    {
        let lines = vec![
            Line::from(Span::styled(
                card.value,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(card.detail, Style::default().fg(Color::Gray))),
        ];

        let block = Block::default()
            .title(card.title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(card.color));

        f.render_widget(Paragraph::new(lines).block(block), *chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::types::{JobStats, NodeStats, ResourceStats};

    #[test]
    fn test_cards_show_aggregate_values() {
        let stats = Stats {
            nodes: NodeStats {
                total: 3,
                online: 2,
                busy: 1,
            },
            resources: ResourceStats {
                total_cpu_cores: 24,
                total_memory_gb: 64.0,
            },
            jobs: JobStats {
                total: 15,
                completed: 10,
                running: 3,
                failed: 2,
            },
        };

        let cards = build_cards(Some(&stats));
        assert_eq!(cards[0].value, "3");
        assert_eq!(cards[0].detail, "2 online, 1 busy");
        assert_eq!(cards[1].value, "24 cores");
        assert_eq!(cards[1].detail, "64.0 GB memory");
        assert_eq!(cards[2].value, "15");
        assert_eq!(cards[3].detail, "2 failed");
    }

    #[test]
    fn test_cards_before_first_success() {
        let cards = build_cards(None);
        assert!(cards.iter().all(|card| card.value == "-"));
    }
}
