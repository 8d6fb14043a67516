//! DistributeAI Coordinator Client
//!
//! A JSON-over-HTTP client for the coordinator's read endpoints.

use crate::consts::cli_consts::{endpoints, network};
use crate::coordinator::Coordinator;
use crate::coordinator::error::CoordinatorError;
use crate::coordinator::types::{
    Execution, ExecutionList, HealthStatus, Job, JobList, Node, NodeList, Stats,
};
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response, Url};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("distributeai-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct CoordinatorClient {
    client: Client,
    environment: Environment,
}

impl CoordinatorClient {
    /// Builds a client whose every request is bounded by the configured timeouts.
    pub fn new(environment: Environment) -> Result<Self, CoordinatorError> {
        let client = ClientBuilder::new()
            .connect_timeout(network::connect_timeout())
            .timeout(network::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// URL of a job, or of one of its sub-resources. The id is percent-encoded as a path segment.
    fn build_job_url(&self, job_id: &str, tail: Option<&str>) -> Result<Url, CoordinatorError> {
        let mut url = Url::parse(&self.build_url(endpoints::JOBS))
            .map_err(|e| CoordinatorError::InvalidUrl(e.to_string()))?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                CoordinatorError::InvalidUrl(format!("{} cannot be a base URL", self.environment))
            })?;
            segments.push(job_id);
            if let Some(tail) = tail {
                segments.push(tail);
            }
        }
        Ok(url)
    }

    fn decode_body<T: DeserializeOwned>(endpoint: &str, bytes: &[u8]) -> Result<T, CoordinatorError> {
        serde_json::from_slice(bytes).map_err(|source| CoordinatorError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    async fn handle_response_status(response: Response) -> Result<Response, CoordinatorError> {
        if !response.status().is_success() {
            return Err(CoordinatorError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, CoordinatorError> {
        let url = self.build_url(endpoint);
        self.get_url(endpoint, &url).await
    }

    /// GET `url`; `endpoint` names the resource in decode errors.
    async fn get_url<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        url: &str,
    ) -> Result<T, CoordinatorError> {
        log::trace!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_body(endpoint, &response_bytes)
    }
}

#[async_trait::async_trait]
impl Coordinator for CoordinatorClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn get_stats(&self) -> Result<Stats, CoordinatorError> {
        self.get_request(endpoints::STATS).await
    }

    async fn list_nodes(&self) -> Result<Vec<Node>, CoordinatorError> {
        let response: NodeList = self.get_request(endpoints::NODES).await?;
        Ok(response.nodes)
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, CoordinatorError> {
        let response: JobList = self.get_request(endpoints::JOBS).await?;
        Ok(response.jobs)
    }

    async fn get_job(&self, job_id: &str) -> Result<Job, CoordinatorError> {
        let url = self.build_job_url(job_id, None)?;
        self.get_url(url.path().trim_start_matches('/'), url.as_str())
            .await
    }

    async fn job_executions(&self, job_id: &str) -> Result<Vec<Execution>, CoordinatorError> {
        let url = self.build_job_url(job_id, Some(endpoints::EXECUTIONS))?;
        let response: ExecutionList = self
            .get_url(url.path().trim_start_matches('/'), url.as_str())
            .await?;
        Ok(response.executions)
    }

    async fn health(&self) -> Result<HealthStatus, CoordinatorError> {
        self.get_request(endpoints::HEALTH).await
    }
}
