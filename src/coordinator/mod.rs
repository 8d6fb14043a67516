use crate::coordinator::error::CoordinatorError;
use crate::coordinator::types::{Execution, HealthStatus, Job, Node, Stats};
use crate::environment::Environment;

pub(crate) mod client;
pub use client::CoordinatorClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::automock;

/// Read-only view of the coordinator API.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Coordinator: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Aggregate node, resource and job counters.
    async fn get_stats(&self) -> Result<Stats, CoordinatorError>;

    /// All registered nodes, in coordinator order.
    async fn list_nodes(&self) -> Result<Vec<Node>, CoordinatorError>;

    /// All submitted jobs, in coordinator order.
    async fn list_jobs(&self) -> Result<Vec<Job>, CoordinatorError>;

    /// A single job by id.
    async fn get_job(&self, job_id: &str) -> Result<Job, CoordinatorError>;

    /// Every execution of a job across the nodes it was scheduled on.
    async fn job_executions(&self, job_id: &str) -> Result<Vec<Execution>, CoordinatorError>;

    /// Liveness of the coordinator itself.
    async fn health(&self) -> Result<HealthStatus, CoordinatorError>;
}
