//! Table rows for the one-shot commands.

use crate::consts::cli_consts::display::{
    ID_COLUMN_WIDTH, JOB_NAME_COLUMN_WIDTH, NODE_NAME_COLUMN_WIDTH, RESULT_HASH_WIDTH,
};
use crate::coordinator::types::{Execution, Job, Node};
use crate::ui::dashboard::utils::{
    format_reputation, format_submitted, format_success_rate, region_label, truncate,
};
use tabled::Tabled;
use tabled::settings::Style;

/// Display row for `nodes`.
#[derive(Debug, Tabled)]
pub struct NodeRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "NAME")]
    pub name: String,
    #[tabled(rename = "STATUS")]
    pub status: String,
    #[tabled(rename = "REGION")]
    pub region: String,
    #[tabled(rename = "CPU")]
    pub cpu_cores: u32,
    #[tabled(rename = "MEM GB")]
    pub memory_gb: String,
    #[tabled(rename = "REPUTATION")]
    pub reputation: String,
    #[tabled(rename = "SUCCESS")]
    pub success_rate: String,
    #[tabled(rename = "JOBS")]
    pub total_jobs_run: u64,
}

impl From<&Node> for NodeRow {
    fn from(node: &Node) -> Self {
        Self {
            id: truncate(node.id.as_str(), ID_COLUMN_WIDTH),
            name: truncate(&node.name, NODE_NAME_COLUMN_WIDTH),
            status: node.status.clone(),
            region: region_label(node.region.as_deref()).to_string(),
            cpu_cores: node.cpu_cores,
            memory_gb: format!("{:.1}", node.memory_gb),
            reputation: format_reputation(node.reputation_score),
            success_rate: format_success_rate(node.success_rate()),
            total_jobs_run: node.total_jobs_run,
        }
    }
}

/// Display row for `jobs`.
#[derive(Debug, Tabled)]
pub struct JobRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "NAME")]
    pub name: String,
    #[tabled(rename = "STATUS")]
    pub status: String,
    #[tabled(rename = "IMAGE")]
    pub docker_image: String,
    #[tabled(rename = "CPU")]
    pub required_cpu: u32,
    #[tabled(rename = "MEM GB")]
    pub required_memory: u32,
    #[tabled(rename = "CONSENSUS")]
    pub consensus: String,
    #[tabled(rename = "SUBMITTED")]
    pub submitted_at: String,
}

impl From<&Job> for JobRow {
    fn from(job: &Job) -> Self {
        Self {
            id: truncate(job.id.as_str(), ID_COLUMN_WIDTH),
            name: truncate(&job.name, JOB_NAME_COLUMN_WIDTH),
            status: job.status.clone(),
            docker_image: truncate(&job.docker_image, JOB_NAME_COLUMN_WIDTH),
            required_cpu: job.required_cpu,
            required_memory: job.required_memory,
            consensus: format!("{}/{}", job.consensus, job.redundancy),
            submitted_at: format_submitted(&job.submitted_at),
        }
    }
}

/// Display row for the executions of `job`.
#[derive(Debug, Tabled)]
pub struct ExecutionRow {
    #[tabled(rename = "NODE")]
    pub node_id: String,
    #[tabled(rename = "STATUS")]
    pub status: String,
    #[tabled(rename = "RESULT HASH")]
    pub result_hash: String,
}

impl From<&Execution> for ExecutionRow {
    fn from(execution: &Execution) -> Self {
        Self {
            node_id: truncate(execution.node_id.as_str(), ID_COLUMN_WIDTH),
            status: execution.status.clone(),
            result_hash: execution
                .result_hash
                .as_deref()
                .map(|hash| truncate(hash, RESULT_HASH_WIDTH))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Render rows as a rounded table.
pub fn render_table<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    tabled::Table::new(rows).with(Style::rounded()).to_string()
}
