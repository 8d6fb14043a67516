//! Nodes panel component

use super::super::state::DashboardState;
use super::super::utils::{
    format_reputation, format_success_rate, region_label, status_color, success_rate_color,
    truncate,
};
use crate::consts::cli_consts::display::NODE_NAME_COLUMN_WIDTH;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub const EMPTY_NODES_MESSAGE: &str = "No nodes registered yet";

/// Render every node, in coordinator order.
pub fn render_nodes_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let nodes = &state.view.nodes;

    let lines: Vec<Line> = if nodes.is_empty() {
        vec![Line::from(Span::styled(
            EMPTY_NODES_MESSAGE,
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        nodes
            .iter()
            .flat_map(|node| {
                let rate = node.success_rate();
                [
                    Line::from(vec![
                        Span::styled(
                            format!("{} ", truncate(&node.name, NODE_NAME_COLUMN_WIDTH)),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            node.status.clone(),
                            Style::default().fg(status_color(&node.status)),
                        ),
                    ]),
                    Line::from(vec![
                        Span::styled(
                            format!(
                                "  {} | {} cores | {:.1} GB | rep {} | ",
                                region_label(node.region.as_deref()),
                                node.cpu_cores,
                                node.memory_gb,
                                format_reputation(node.reputation_score)
                            ),
                            Style::default().fg(Color::Gray),
                        ),
                        Span::styled(
                            format!(
                                "{} of {} jobs",
                                format_success_rate(rate),
                                node.total_jobs_run
                            ),
                            Style::default().fg(success_rate_color(rate)),
                        ),
                    ]),
                ]
            })
            .collect()
    };

    let block = Block::default()
        .title(format!("NODES ({})", state.view.node_count()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
