//! Recent jobs panel component

use super::super::state::DashboardState;
use super::super::utils::{format_submitted, status_color, truncate};
use crate::consts::cli_consts::display::JOB_NAME_COLUMN_WIDTH;
use crate::coordinator::types::Job;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub const EMPTY_JOBS_MESSAGE: &str = "No jobs submitted yet";

/// Render the most recent jobs. The title badge counts every job.
pub fn render_jobs_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let recent = state.view.recent_jobs();

    let lines: Vec<Line> = if recent.is_empty() {
        vec![Line::from(Span::styled(
            EMPTY_JOBS_MESSAGE,
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        recent.iter().flat_map(job_lines).collect()
    };

    let block = Block::default()
        .title(format!("RECENT JOBS ({})", state.view.job_count()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Name and status, an optional description, the requirements line and the result verbatim.
fn job_lines(job: &Job) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} ", truncate(&job.name, JOB_NAME_COLUMN_WIDTH)),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            job.status.clone(),
            Style::default().fg(status_color(&job.status)),
        ),
    ])];

    if let Some(description) = &job.description {
        lines.push(Line::from(Span::styled(
            format!("  {}", description),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(Span::styled(
        format!(
            "  {} | {} cpu | {} GB | {}/{} consensus | {}",
            truncate(&job.docker_image, JOB_NAME_COLUMN_WIDTH),
            job.required_cpu,
            job.required_memory,
            job.consensus,
            job.redundancy,
            format_submitted(&job.submitted_at)
        ),
        Style::default().fg(Color::Gray),
    )));

    if let Some(result) = &job.result {
        let result_style = Style::default().fg(Color::Green);
        lines.push(Line::from(Span::styled("  Result:", result_style)));
        lines.extend(
            result
                .lines()
                .map(|line| Line::from(Span::styled(format!("    {}", line), result_style))),
        );
    }

    lines
}
