//! One-shot commands
//!
//! Each command performs a single request against the coordinator and prints
//! the result as plain text.

use crate::coordinator::Coordinator;
use crate::coordinator::types::{Execution, HealthStatus, Job, Node, Stats};
use crate::display::{ExecutionRow, JobRow, NodeRow, render_table};
use crate::ui::dashboard::components::jobs::EMPTY_JOBS_MESSAGE;
use crate::ui::dashboard::components::nodes::EMPTY_NODES_MESSAGE;
use crate::ui::dashboard::utils::format_submitted;
use crate::{print_cmd_error, print_cmd_success};
use std::error::Error;

pub async fn show_stats(coordinator: &dyn Coordinator) -> Result<(), Box<dyn Error>> {
    let stats = coordinator.get_stats().await.inspect_err(|e| {
        print_cmd_error!("Failed to fetch stats", e.to_string().as_str());
    })?;
    println!("{}", format_stats(&stats));
    Ok(())
}

pub async fn show_nodes(coordinator: &dyn Coordinator) -> Result<(), Box<dyn Error>> {
    let nodes = coordinator.list_nodes().await.inspect_err(|e| {
        print_cmd_error!("Failed to fetch nodes", e.to_string().as_str());
    })?;
    println!("{}", format_node_table(&nodes));
    Ok(())
}

pub async fn show_jobs(coordinator: &dyn Coordinator) -> Result<(), Box<dyn Error>> {
    let jobs = coordinator.list_jobs().await.inspect_err(|e| {
        print_cmd_error!("Failed to fetch jobs", e.to_string().as_str());
    })?;
    println!("{}", format_job_table(&jobs));
    Ok(())
}

/// Print one job with its executions.
pub async fn show_job(coordinator: &dyn Coordinator, job_id: &str) -> Result<(), Box<dyn Error>> {
    let job = coordinator.get_job(job_id).await.inspect_err(|e| {
        if e.status() == Some(404) {
            print_cmd_error!("Job not found", job_id);
        } else {
            print_cmd_error!("Failed to fetch job", e.to_string().as_str());
        }
    })?;
    println!("{}", format_job_detail(&job));

    let executions = coordinator.job_executions(job_id).await.inspect_err(|e| {
        print_cmd_error!("Failed to fetch executions", e.to_string().as_str());
    })?;
    println!("\n{}", format_executions(&executions));
    Ok(())
}

pub async fn check_health(coordinator: &dyn Coordinator) -> Result<(), Box<dyn Error>> {
    let health = coordinator.health().await.inspect_err(|e| {
        print_cmd_error!("Coordinator is unreachable", e.to_string().as_str());
    })?;
    print_cmd_success!(
        "Coordinator reachable",
        "{}",
        format_health(&coordinator.environment().api_url(), &health)
    );
    Ok(())
}

pub fn format_stats(stats: &Stats) -> String {
    [
        "Network".to_string(),
        format!(
            "  Nodes:     {} total, {} online, {} busy",
            stats.nodes.total, stats.nodes.online, stats.nodes.busy
        ),
        format!(
            "  Resources: {} CPU cores, {:.1} GB memory",
            stats.resources.total_cpu_cores, stats.resources.total_memory_gb
        ),
        format!(
            "  Jobs:      {} total, {} completed, {} running, {} failed",
            stats.jobs.total, stats.jobs.completed, stats.jobs.running, stats.jobs.failed
        ),
    ]
    .join("\n")
}

pub fn format_node_table(nodes: &[Node]) -> String {
    if nodes.is_empty() {
        return EMPTY_NODES_MESSAGE.to_string();
    }
    let table = render_table(nodes.iter().map(NodeRow::from));
    format!("{}\n{} nodes", table, nodes.len())
}

pub fn format_job_table(jobs: &[Job]) -> String {
    if jobs.is_empty() {
        return EMPTY_JOBS_MESSAGE.to_string();
    }
    let table = render_table(jobs.iter().map(JobRow::from));
    format!("{}\n{} jobs", table, jobs.len())
}

/// Labelled job fields; the result and error follow verbatim when present.
pub fn format_job_detail(job: &Job) -> String {
    let mut lines = vec![
        "Job".to_string(),
        format!("  ID:           {}", job.id),
        format!("  Name:         {}", job.name),
        format!("  Description:  {}", job.description.as_deref().unwrap_or("-")),
        format!("  Status:       {}", job.status),
        format!("  Image:        {}", job.docker_image),
        format!(
            "  Requires:     {} cpu, {} GB",
            job.required_cpu, job.required_memory
        ),
        format!(
            "  Verification: {}/{} consensus",
            job.consensus, job.redundancy
        ),
        format!("  Submitted:    {}", format_submitted(&job.submitted_at)),
    ];
    if let Some(started_at) = &job.started_at {
        lines.push(format!("  Started:      {}", format_submitted(started_at)));
    }
    if let Some(completed_at) = &job.completed_at {
        lines.push(format!("  Completed:    {}", format_submitted(completed_at)));
    }
    if let Some(result) = &job.result {
        lines.push(format!("\nResult:\n{}", result));
    }
    if let Some(error) = &job.error_message {
        lines.push(format!("\nError:\n{}", error));
    }
    lines.join("\n")
}

pub fn format_executions(executions: &[Execution]) -> String {
    let header = format!("Executions: {}", executions.len());
    if executions.is_empty() {
        return header;
    }
    let table = render_table(executions.iter().map(ExecutionRow::from));
    format!("{}\n{}", header, table)
}

pub fn format_health(api_url: &str, health: &HealthStatus) -> String {
    match &health.time {
        Some(time) => format!("{} reports '{}' at {}", api_url, health.status, time),
        None => format!("{} reports '{}'", api_url, health.status),
    }
}
