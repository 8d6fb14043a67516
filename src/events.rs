//! Event System
//!
//! Activity-log entries derived from refresh cycles

use crate::error_classifier::ErrorClassifier;
use crate::logging::{LogLevel, should_log_with_env};
use crate::workers::CycleReport;
use chrono::{DateTime, Local};
use std::fmt::Display;
use std::time::Duration;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// The cycle this event describes, if any.
    pub cycle: Option<u64>,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(
        cycle: Option<u64>,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
        at: DateTime<Local>,
    ) -> Self {
        Self {
            cycle,
            msg,
            timestamp: at.format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    /// Summarise a finished cycle.
    pub fn from_report(report: &CycleReport, classifier: &ErrorClassifier) -> Self {
        let elapsed_ms = (report.finished_at - report.started_at)
            .num_milliseconds()
            .max(0);

        match &report.outcome {
            Ok(snapshot) => Self::new(
                Some(report.cycle),
                format!(
                    "Cycle {}: refreshed {} nodes, {} jobs in {}ms",
                    report.cycle,
                    snapshot.nodes.len(),
                    snapshot.jobs.len(),
                    elapsed_ms
                ),
                EventType::Success,
                LogLevel::Debug,
                report.finished_at,
            ),
            Err(e) => Self::new(
                Some(report.cycle),
                format!("Cycle {}: {}", report.cycle, e),
                EventType::Error,
                classifier.classify_fetch_error(&e.source),
                report.finished_at,
            ),
        }
    }

    /// Marks the start of polling.
    pub fn polling_started(api_url: &str, interval: Duration) -> Self {
        Self::new(
            None,
            format!(
                "Polling {} every {}s",
                api_url,
                interval.as_secs_f64()
            ),
            EventType::Refresh,
            LogLevel::Info,
            Local::now(),
        )
    }

    pub fn should_display(&self) -> bool {
        // Failures and lifecycle messages are always shown
        if self.event_type != EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::error::CoordinatorError;
    use crate::coordinator::types::{JobStats, NodeStats, ResourceStats, Stats};
    use crate::workers::{CycleError, Resource, Snapshot};
    use chrono::TimeZone;

    fn report(outcome: Result<Snapshot, CycleError>) -> CycleReport {
        let started_at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        CycleReport {
            cycle: 4,
            started_at,
            finished_at: started_at + chrono::Duration::milliseconds(250),
            outcome,
        }
    }

    #[test]
    fn test_success_event_summarises_counts() {
        let snapshot = Snapshot {
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
        };
        let event = Event::from_report(&report(Ok(snapshot)), &ErrorClassifier::new());

        assert_eq!(event.event_type, EventType::Success);
        assert_eq!(event.cycle, Some(4));
        assert_eq!(event.msg, "Cycle 4: refreshed 0 nodes, 0 jobs in 250ms");
        assert_eq!(event.timestamp, "2024-03-09 14:05:00");
    }

    #[test]
    fn test_failure_event_is_always_displayed() {
        let failed = report(Err(CycleError {
            resource: Resource::Jobs,
            source: CoordinatorError::Http {
                status: 429,
                message: "slow down".to_string(),
            },
        }));
        let event = Event::from_report(&failed, &ErrorClassifier::new());

        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.log_level, LogLevel::Debug);
        assert!(event.should_display());
        assert!(event.to_string().starts_with("Error [2024-03-09 14:05:00] Cycle 4:"));
    }

    #[test]
    fn test_polling_started_event() {
        let event = Event::polling_started("http://localhost:8080", Duration::from_millis(5000));
        assert_eq!(event.event_type, EventType::Refresh);
        assert_eq!(event.msg, "Polling http://localhost:8080 every 5s");
        assert!(event.should_display());
    }
}
