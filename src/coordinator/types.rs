//! Records returned by the coordinator API.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

/// Identifier of a node or job.
///
/// The coordinator sends string ids; hand-written fixtures and older builds send integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => ResourceId(text),
            RawId::Number(number) => ResourceId(number.to_string()),
        })
    }
}

/// Aggregate counters from `GET /stats`.
///
/// No field has a default: a partially filled stats body is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub nodes: NodeStats,
    pub resources: ResourceStats,
    pub jobs: JobStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStats {
    pub total: u64,
    pub online: u64,
    pub busy: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceStats {
    pub total_cpu_cores: u64,
    pub total_memory_gb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobStats {
    pub total: u64,
    pub completed: u64,
    pub running: u64,
    pub failed: u64,
}

/// A worker node registered with the coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: ResourceId,
    pub name: String,
    /// Opaque status label such as `online`, `busy`, `offline` or `faulty`.
    pub status: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub region: Option<String>,
    /// Between 0 and 100.
    #[serde(default)]
    pub reputation_score: f64,
    #[serde(default)]
    pub cpu_cores: u32,
    #[serde(default)]
    pub memory_gb: f64,
    #[serde(default)]
    pub total_jobs_run: u64,
    #[serde(default)]
    pub successful_jobs_run: u64,
}

impl Node {
    /// Percentage of successful runs, 0 for a node that has not run anything.
    pub fn success_rate(&self) -> f64 {
        if self.total_jobs_run == 0 {
            return 0.0;
        }
        self.successful_jobs_run as f64 / self.total_jobs_run as f64 * 100.0
    }
}

/// A job submitted to the coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: ResourceId,
    pub name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    /// Opaque status label such as `pending`, `running`, `verifying` or `completed`.
    pub status: String,
    #[serde(default)]
    pub docker_image: String,
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub required_cpu: u32,
    /// In GB.
    #[serde(default)]
    pub required_memory: u32,
    /// How many executions must agree.
    #[serde(default)]
    pub consensus: u32,
    /// How many nodes the job runs on.
    #[serde(default)]
    pub redundancy: u32,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub result: Option<String>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub error_message: Option<String>,
}

/// One run of a job on one node, from `GET /api/v1/jobs/{id}/executions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Execution {
    pub id: ResourceId,
    pub node_id: ResourceId,
    pub status: String,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub result_hash: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub error_message: Option<String>,
}

/// Body of `GET /api/v1/nodes`. A missing list, or one that is not an array, means no nodes.
#[derive(Debug, Default, Deserialize)]
pub struct NodeList {
    #[serde(default, deserialize_with = "list_or_empty")]
    pub nodes: Vec<Node>,
}

/// Body of `GET /api/v1/jobs`. A missing list, or one that is not an array, means no jobs.
#[derive(Debug, Default, Deserialize)]
pub struct JobList {
    #[serde(default, deserialize_with = "list_or_empty")]
    pub jobs: Vec<Job>,
}

/// Body of `GET /api/v1/jobs/{id}/executions`.
#[derive(Debug, Default, Deserialize)]
pub struct ExecutionList {
    #[serde(default, deserialize_with = "list_or_empty")]
    pub executions: Vec<Execution>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub time: Option<String>,
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn list_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match serde_json::Value::deserialize(deserializer)? {
        value @ serde_json::Value::Array(_) => {
            serde_json::from_value(value).map_err(serde::de::Error::custom)
        }
        serde_json::Value::Null => Ok(Vec::new()),
        other => {
            log::debug!("Ignoring non-list value in list field: {}", other);
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_accepts_numeric_id_and_fills_defaults() {
        let node: Node = serde_json::from_value(json!({
            "id": 1,
            "name": "n1",
            "status": "online",
            "reputation_score": 87.3,
            "cpu_cores": 4,
            "memory_gb": 16,
            "total_jobs_run": 10,
            "successful_jobs_run": 9
        }))
        .unwrap();

        assert_eq!(node.id.as_str(), "1");
        assert_eq!(node.region, None);
        assert_eq!(node.memory_gb, 16.0);
        assert!((node.success_rate() - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_success_rate_without_runs_is_zero() {
        let node: Node = serde_json::from_value(json!({
            "id": "node-a", "name": "a", "status": "offline", "region": ""
        }))
        .unwrap();
        assert_eq!(node.success_rate(), 0.0);
        // The coordinator sends "" for an unknown region.
        assert_eq!(node.region, None);
    }

    #[test]
    fn test_job_parses_coordinator_timestamps() {
        let job: Job = serde_json::from_value(json!({
            "id": "job-1",
            "name": "resnet",
            "description": "",
            "status": "verifying",
            "docker_image": "python:3.11",
            "submitted_at": "2024-05-01T12:30:00.123456+02:00",
            "required_cpu": 2,
            "required_memory": 4,
            "consensus": 2,
            "redundancy": 3,
            "result": "42\n"
        }))
        .unwrap();

        assert_eq!(job.description, None);
        assert_eq!(job.result.as_deref(), Some("42\n"));
        assert_eq!(job.completed_at, None);
        assert_eq!(job.error_message, None);
        assert_eq!(job.submitted_at.to_rfc3339(), "2024-05-01T10:30:00.123456+00:00");
    }

    #[test]
    fn test_lists_default_when_field_missing_or_null() {
        let nodes: NodeList = serde_json::from_str(r#"{"count": 0}"#).unwrap();
        assert!(nodes.nodes.is_empty());

        let jobs: JobList = serde_json::from_str(r#"{"jobs": null, "count": 0}"#).unwrap();
        assert!(jobs.jobs.is_empty());

        let jobs: JobList = serde_json::from_str(r#"{"jobs": "unavailable"}"#).unwrap();
        assert!(jobs.jobs.is_empty());
    }

    #[test]
    fn test_list_with_malformed_entry_is_rejected() {
        let body = r#"{"nodes": [{"name": "no id or status"}]}"#;
        assert!(serde_json::from_str::<NodeList>(body).is_err());
    }

    #[test]
    fn test_executions_tolerate_missing_optional_fields() {
        let body = json!({
            "job_id": "job-1",
            "count": 2,
            "executions": [
                {
                    "id": "exec-1", "job_id": "job-1", "node_id": "node-a",
                    "status": "completed",
                    "started_at": "2024-05-01T10:00:00Z",
                    "completed_at": "2024-05-01T10:00:04Z",
                    "result_hash": "9f86d081884c7d659a2feaa0c55ad015"
                },
                { "id": "exec-2", "node_id": 3, "status": "running", "result_hash": "" }
            ]
        });
        let list: ExecutionList = serde_json::from_value(body).unwrap();

        assert_eq!(list.executions.len(), 2);
        assert!(list.executions[0].completed_at.is_some());
        assert_eq!(list.executions[1].node_id.as_str(), "3");
        assert_eq!(list.executions[1].result_hash, None);
        assert_eq!(list.executions[1].started_at, None);
    }

    #[test]
    fn test_stats_rejects_partial_body() {
        let partial = json!({ "nodes": { "total": 1, "online": 1, "busy": 0 } });
        assert!(serde_json::from_value::<Stats>(partial).is_err());

        let full = json!({
            "nodes": { "total": 3, "online": 2, "busy": 1 },
            "resources": { "total_cpu_cores": 12, "total_memory_gb": 48 },
            "jobs": { "total": 7, "completed": 4, "running": 2, "failed": 1 }
        });
        let stats: Stats = serde_json::from_value(full).unwrap();
        assert_eq!(stats.jobs.running, 2);
        assert_eq!(stats.resources.total_memory_gb, 48.0);
    }
}
