//! Error handling for the coordinator module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoordinatorError {
    /// Reqwest error, typically related to network issues, timeouts or body reads.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The coordinator answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The request URL could not be built from the base URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// The response body did not have the expected shape.
    #[error("Malformed response from /{endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CoordinatorError {
    pub async fn from_response(response: reqwest::Response) -> CoordinatorError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .map(|text| text.trim().to_string())
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        CoordinatorError::Http { status, message }
    }

    /// HTTP status of the failure, if the coordinator answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            CoordinatorError::Http { status, .. } => Some(*status),
            CoordinatorError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            CoordinatorError::InvalidUrl(_) | CoordinatorError::Decode { .. } => None,
        }
    }
}
