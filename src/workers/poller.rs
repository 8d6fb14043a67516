//! Periodic refresh of the three coordinator resources
//!
//! Every tick starts an independent refresh cycle. A cycle fetches stats, nodes
//! and jobs concurrently and produces a single [`CycleReport`] that is either a
//! complete [`Snapshot`] or the first failure encountered.

use super::core::{PollerConfig, ReportSender};
use crate::coordinator::Coordinator;
use crate::coordinator::error::CoordinatorError;
use crate::coordinator::types::{Job, Node, Stats};
use chrono::{DateTime, Local};
use futures::TryFutureExt;
use std::sync::Arc;
use thiserror::Error;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

/// The coordinator resources fetched by one cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Resource {
    Stats,
    Nodes,
    Jobs,
}

/// The first request that failed during a cycle.
#[derive(Debug, Error)]
#[error("Failed to fetch {resource}: {source}")]
pub struct CycleError {
    pub resource: Resource,
    #[source]
    pub source: CoordinatorError,
}

impl CycleError {
    fn tagged(resource: Resource) -> impl FnOnce(CoordinatorError) -> CycleError {
        move |source| CycleError { resource, source }
    }
}

/// All three resources from one successful cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub stats: Stats,
    pub nodes: Vec<Node>,
    pub jobs: Vec<Job>,
}

/// The immutable result of one cycle, consumed by whoever owns the view.
#[derive(Debug)]
pub struct CycleReport {
    /// Sequence number in start order, starting at 1.
    pub cycle: u64,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub outcome: Result<Snapshot, CycleError>,
}

impl CycleReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Fetch stats, nodes and jobs concurrently.
///
/// Fails as soon as any request fails; the other requests are dropped since
/// none of them has side effects.
pub async fn refresh_cycle(coordinator: &dyn Coordinator) -> Result<Snapshot, CycleError> {
    let (stats, nodes, jobs) = futures::try_join!(
        coordinator
            .get_stats()
            .map_err(CycleError::tagged(Resource::Stats)),
        coordinator
            .list_nodes()
            .map_err(CycleError::tagged(Resource::Nodes)),
        coordinator
            .list_jobs()
            .map_err(CycleError::tagged(Resource::Jobs)),
    )?;

    Ok(Snapshot { stats, nodes, jobs })
}

/// Runs refresh cycles on a fixed cadence until cancelled.
pub struct Poller {
    coordinator: Arc<dyn Coordinator>,
    config: PollerConfig,
    report_sender: ReportSender,
    cancel: CancellationToken,
    cycles_started: u64,
}

impl Poller {
    pub fn new(
        coordinator: Arc<dyn Coordinator>,
        config: PollerConfig,
        report_sender: ReportSender,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            coordinator,
            config,
            report_sender,
            cancel,
            cycles_started: 0,
        }
    }

    /// Start a cycle immediately, then one per interval measured from cycle start.
    ///
    /// Cycles are not awaited here, so a slow cycle never delays the next one.
    /// Returns once the cancellation token fires.
    pub async fn run(mut self) {
        let mut ticker = interval(self.config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        log::debug!(
            "Polling {} every {}ms",
            self.coordinator.environment().api_url(),
            self.config.interval.as_millis()
        );

        loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                _ = ticker.tick() => {
                    self.spawn_cycle();
                }
            }
        }

        log::debug!("Poller stopped after {} cycles", self.cycles_started);
    }

    fn spawn_cycle(&mut self) {
        self.cycles_started += 1;
        let cycle = self.cycles_started;
        let coordinator = Arc::clone(&self.coordinator);
        let report_sender = self.report_sender.clone();
        let cancel = self.cancel.clone();

        tokio::spawn(async move {
            let started_at = Local::now();
            let outcome = tokio::select! {
                biased;
                // In-flight requests are abandoned on teardown
                _ = cancel.cancelled() => return,
                outcome = refresh_cycle(coordinator.as_ref()) => outcome,
            };

            if let Err(e) = &outcome {
                log::warn!("Refresh cycle {} failed: {}", cycle, e);
            }

            let report = CycleReport {
                cycle,
                started_at,
                finished_at: Local::now(),
                outcome,
            };
            if !report_sender.send_report(report).await {
                log::debug!("Dropped report of cycle {} after shutdown", cycle);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::MockCoordinator;
    use crate::coordinator::types::{Execution, HealthStatus, JobStats, NodeStats, ResourceStats};
    use crate::environment::Environment;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio::task::JoinHandle;
    use tokio::time::sleep;

    fn sample_stats() -> Stats {
        Stats {
            nodes: NodeStats {
                total: 2,
                online: 1,
                busy: 1,
            },
            resources: ResourceStats {
                total_cpu_cores: 12,
                total_memory_gb: 32.0,
            },
            jobs: JobStats {
                total: 5,
                completed: 3,
                running: 1,
                failed: 1,
            },
        }
    }

    fn sample_node() -> Node {
        serde_json::from_value(serde_json::json!({
            "id": "node-1", "name": "n1", "status": "online",
            "reputation_score": 87.3, "cpu_cores": 4, "memory_gb": 16,
            "total_jobs_run": 10, "successful_jobs_run": 9
        }))
        .unwrap()
    }

    fn healthy_mock() -> MockCoordinator {
        let mut mock = MockCoordinator::new();
        mock.expect_environment().return_const(Environment::Local);
        mock.expect_get_stats().returning(|| Ok(sample_stats()));
        mock.expect_list_nodes().returning(|| Ok(vec![sample_node()]));
        mock.expect_list_jobs().returning(|| Ok(Vec::new()));
        mock
    }

    /// Coordinator whose every request takes `delay`, for scheduling tests.
    struct SlowCoordinator {
        environment: Environment,
        delay: Duration,
        stats_calls: AtomicUsize,
    }

    impl SlowCoordinator {
        fn new(delay: Duration) -> Self {
            Self {
                environment: Environment::Local,
                delay,
                stats_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl Coordinator for SlowCoordinator {
        fn environment(&self) -> &Environment {
            &self.environment
        }

        async fn get_stats(&self) -> Result<Stats, CoordinatorError> {
            self.stats_calls.fetch_add(1, Ordering::SeqCst);
            sleep(self.delay).await;
            Ok(sample_stats())
        }

        async fn list_nodes(&self) -> Result<Vec<Node>, CoordinatorError> {
            sleep(self.delay).await;
            Ok(Vec::new())
        }

        async fn list_jobs(&self) -> Result<Vec<Job>, CoordinatorError> {
            sleep(self.delay).await;
            Ok(Vec::new())
        }

        async fn get_job(&self, _job_id: &str) -> Result<Job, CoordinatorError> {
            Err(CoordinatorError::Http {
                status: 404,
                message: "not polled".to_string(),
            })
        }

        async fn job_executions(&self, _job_id: &str) -> Result<Vec<Execution>, CoordinatorError> {
            Ok(Vec::new())
        }

        async fn health(&self) -> Result<HealthStatus, CoordinatorError> {
            Ok(HealthStatus {
                status: "healthy".to_string(),
                time: None,
            })
        }
    }

    fn start(
        coordinator: Arc<dyn Coordinator>,
        every: Duration,
    ) -> (
        mpsc::Receiver<CycleReport>,
        CancellationToken,
        JoinHandle<()>,
    ) {
        let (sender, receiver) = mpsc::channel(64);
        let cancel = CancellationToken::new();
        let poller = Poller::new(
            coordinator,
            PollerConfig { interval: every },
            ReportSender::new(sender, cancel.clone()),
            cancel.clone(),
        );
        (receiver, cancel, tokio::spawn(poller.run()))
    }

    #[tokio::test]
    async fn test_refresh_cycle_returns_all_three_resources() {
        let mock = healthy_mock();

        let snapshot = refresh_cycle(&mock).await.unwrap();
        assert_eq!(snapshot.stats, sample_stats());
        assert_eq!(snapshot.nodes, vec![sample_node()]);
        assert!(snapshot.jobs.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_cycle_fails_when_any_request_fails() {
        let mut mock = MockCoordinator::new();
        mock.expect_get_stats().returning(|| Ok(sample_stats()));
        mock.expect_list_nodes().returning(|| {
            Err(CoordinatorError::Http {
                status: 500,
                message: "Failed to retrieve nodes".to_string(),
            })
        });
        mock.expect_list_jobs().returning(|| Ok(Vec::new()));

        let err = refresh_cycle(&mock).await.unwrap_err();
        assert_eq!(err.resource, Resource::Nodes);
        assert_eq!(
            err.to_string(),
            "Failed to fetch nodes: HTTP error with status 500: Failed to retrieve nodes"
        );
    }

    #[tokio::test]
    async fn test_malformed_stats_fails_the_cycle() {
        let mut mock = MockCoordinator::new();
        mock.expect_get_stats().returning(|| {
            Err(CoordinatorError::Decode {
                endpoint: "stats".to_string(),
                source: serde_json::from_str::<Stats>("{}").unwrap_err(),
            })
        });
        mock.expect_list_nodes().returning(|| Ok(Vec::new()));
        mock.expect_list_jobs().returning(|| Ok(Vec::new()));

        let err = refresh_cycle(&mock).await.unwrap_err();
        assert_eq!(err.resource, Resource::Stats);
    }

    #[tokio::test]
    async fn test_first_cycle_runs_immediately() {
        let (mut receiver, cancel, handle) =
            start(Arc::new(healthy_mock()), Duration::from_secs(60));

        let report = tokio::time::timeout(Duration::from_secs(2), receiver.recv())
            .await
            .expect("first cycle should not wait for the interval")
            .expect("channel open");
        assert_eq!(report.cycle, 1);
        assert!(report.is_success());

        cancel.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_slow_cycles_do_not_delay_the_schedule() {
        let coordinator = Arc::new(SlowCoordinator::new(Duration::from_millis(150)));
        let (_receiver, cancel, handle) = start(coordinator.clone(), Duration::from_millis(40));

        sleep(Duration::from_millis(330)).await;
        cancel.cancel();
        handle.await.unwrap();

        // Sequential cycles would have started at most three times by now.
        let started = coordinator.stats_calls.load(Ordering::SeqCst);
        assert!(started >= 5, "only {} cycles started", started);
    }

    #[tokio::test]
    async fn test_in_flight_cycle_is_not_reported_after_cancellation() {
        let coordinator = Arc::new(SlowCoordinator::new(Duration::from_millis(200)));
        let (mut receiver, cancel, handle) = start(coordinator.clone(), Duration::from_secs(60));

        // Let cycle 1 get in flight, then tear down.
        sleep(Duration::from_millis(50)).await;
        assert_eq!(coordinator.stats_calls.load(Ordering::SeqCst), 1);
        cancel.cancel();
        handle.await.unwrap();

        sleep(Duration::from_millis(300)).await;
        assert!(receiver.try_recv().is_err());
        assert_eq!(coordinator.stats_calls.load(Ordering::SeqCst), 1);
    }
}
