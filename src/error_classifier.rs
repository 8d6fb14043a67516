use crate::coordinator::error::CoordinatorError;
use crate::logging::LogLevel;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Log level for a failed coordinator request.
    pub fn classify_fetch_error(&self, error: &CoordinatorError) -> LogLevel {
        if let CoordinatorError::Decode { .. } = error {
            // Coordinator speaks a different schema
            return LogLevel::Error;
        }

        match error.status() {
            // Temporary server issues; the next cycle retries anyway
            Some(429) => LogLevel::Debug,
            Some(500..=599) => LogLevel::Warn,

            // Wrong address or a coordinator that refuses us will not heal by itself
            Some(401 | 403 | 404) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
