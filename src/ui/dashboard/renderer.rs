//! Dashboard main renderer

use super::components::{banner, footer, header, jobs, logs, nodes, stats_cards};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let banner_height = if state.view.error.is_some() { 3 } else { 0 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(banner_height),
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(25),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    banner::render_error_banner(f, main_chunks[1], state);
    stats_cards::render_stats_cards(f, main_chunks[2], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[3]);

    nodes::render_nodes_panel(f, content_chunks[0], state);
    jobs::render_jobs_panel(f, content_chunks[1], state);
    logs::render_logs_panel(f, main_chunks[4], state);
    footer::render_footer(f, main_chunks[5]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::error::CoordinatorError;
    use crate::coordinator::types::{Job, JobStats, NodeStats, ResourceStats, Stats};
    use crate::environment::Environment;
    use crate::workers::{CycleError, CycleReport, Resource, Snapshot};
    use chrono::Local;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn draw(state: &DashboardState) -> String {
        draw_sized(state, 160, 50)
    }

    fn draw_sized(state: &DashboardState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn empty_snapshot() -> Snapshot {
        Snapshot {
            stats: Stats {
                nodes: NodeStats {
                    total: 0,
                    online: 0,
                    busy: 0,
                },
                resources: ResourceStats {
                    total_cpu_cores: 0,
                    total_memory_gb: 0.0,
                },
                jobs: JobStats {
                    total: 0,
                    completed: 0,
                    running: 0,
                    failed: 0,
                },
            },
            nodes: Vec::new(),
            jobs: Vec::new(),
        }
    }

    fn report(cycle: u64, outcome: Result<Snapshot, CycleError>) -> CycleReport {
        CycleReport {
            cycle,
            started_at: Local::now(),
            finished_at: Local::now(),
            outcome,
        }
    }

    #[test]
    fn test_empty_network_shows_placeholders() {
        let mut state = DashboardState::new(Environment::Local, Instant::now(), true);
        state.add_report(report(1, Ok(empty_snapshot())));
        state.update();

        let screen = draw(&state);
        assert!(screen.contains("No nodes registered yet"));
        assert!(screen.contains("No jobs submitted yet"));
        assert!(screen.contains("RECENT JOBS (0)"));
        assert!(!screen.contains("Error:"));
    }

    #[test]
    fn test_failed_refresh_shows_banner_over_stale_data() {
        let mut state = DashboardState::new(Environment::Local, Instant::now(), false);
        state.add_report(report(1, Ok(empty_snapshot())));
        state.add_report(report(
            2,
            Err(CycleError {
                resource: Resource::Stats,
                source: CoordinatorError::Http {
                    status: 503,
                    message: "maintenance".to_string(),
                },
            }),
        ));
        state.update();

        let screen = draw(&state);
        assert!(screen.contains("Error: Failed to fetch stats"));
        assert!(screen.contains("No nodes registered yet"));
        assert!(screen.contains("STALE"));
    }

    #[test]
    fn test_job_details_reach_the_jobs_panel() {
        let job: Job = serde_json::from_value(serde_json::json!({
            "id": "job-1",
            "name": "train-resnet",
            "description": "train-resnet-desc",
            "status": "completed",
            "docker_image": "python:3.11",
            "submitted_at": "2024-05-01T10:00:00Z",
            "required_cpu": 2,
            "required_memory": 4,
            "consensus": 2,
            "redundancy": 3,
            "result": "RESULT-OUTPUT-42"
        }))
        .unwrap();
        let mut snapshot = empty_snapshot();
        snapshot.jobs.push(job);

        let mut state = DashboardState::new(Environment::Local, Instant::now(), false);
        state.add_report(report(1, Ok(snapshot)));
        state.update();

        let screen = draw_sized(&state, 200, 60);
        assert!(screen.contains("train-resnet-desc"));
        assert!(screen.contains("2/3 consensus"));
        assert!(screen.contains("Result:"));
        assert!(screen.contains("RESULT-OUTPUT-42"));
    }
}
