pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying cycle reports to the state owner.
    /// Overlapping cycles are rare, so a small buffer is enough.
    pub const REPORT_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // POLLING CONFIGURATION
    // =============================================================================

    /// Refresh cadence configuration
    pub mod polling {
        use std::time::Duration;

        /// Interval between the starts of two refresh cycles (milliseconds)
        pub const REFRESH_INTERVAL_MS: u64 = 5_000;

        /// Helper function to get the refresh interval
        pub const fn refresh_interval() -> Duration {
            Duration::from_millis(REFRESH_INTERVAL_MS)
        }
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP client configuration
    pub mod network {
        use std::time::Duration;

        /// Coordinator address used when nothing overrides it
        pub const DEFAULT_API_URL: &str = "http://localhost:8080";

        /// Environment variable that overrides the coordinator address
        pub const API_URL_ENV_VAR: &str = "DISTRIBUTEAI_API_URL";

        /// Upper bound for a single request, including reading the body (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Upper bound for establishing a connection (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }
    }

    /// Coordinator API paths, relative to the base URL
    pub mod endpoints {
        pub const STATS: &str = "stats";
        pub const NODES: &str = "api/v1/nodes";
        pub const JOBS: &str = "api/v1/jobs";
        /// Appended to a job's path to list its executions
        pub const EXECUTIONS: &str = "executions";
        pub const HEALTH: &str = "health";
    }

    // =============================================================================
    // DISPLAY CONFIGURATION
    // =============================================================================

    pub mod display {
        /// Number of jobs shown in the job list; the count badge still shows all of them.
        pub const RECENT_JOBS_LIMIT: usize = 10;

        /// Column widths used by the one-shot table output
        pub const ID_COLUMN_WIDTH: usize = 20;
        pub const NODE_NAME_COLUMN_WIDTH: usize = 25;
        pub const JOB_NAME_COLUMN_WIDTH: usize = 30;

        /// Characters of an execution's result hash shown by `job`
        pub const RESULT_HASH_WIDTH: usize = 16;
    }
}
