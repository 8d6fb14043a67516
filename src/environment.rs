use crate::consts::cli_consts::network::DEFAULT_API_URL;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the coordinator deployments the dashboard can point at.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Coordinator running on this machine.
    #[default]
    Local,
    /// Coordinator at a user-supplied address.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the coordinator base URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => DEFAULT_API_URL.to_string(),
            Environment::Custom { api_url } => api_url.clone(),
        }
    }

    /// Resolves the environment once at startup.
    ///
    /// The first non-empty value wins, in order: command-line flag, environment
    /// variable, config file. With none of them set the local coordinator is used.
    pub fn resolve(
        flag: Option<&str>,
        env_var: Option<&str>,
        config_value: Option<&str>,
    ) -> Result<Self, InvalidApiUrl> {
        let chosen = [flag, env_var, config_value]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty());

        match chosen {
            Some(value) => value.parse(),
            None => Ok(Environment::Local),
        }
    }
}

/// Returned when an override is not an http(s) URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid API URL '{0}': expected an http:// or https:// address")]
pub struct InvalidApiUrl(pub String);

impl FromStr for Environment {
    type Err = InvalidApiUrl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }

        let lower = trimmed.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(InvalidApiUrl(trimmed.to_string()));
        }

        let api_url = trimmed.trim_end_matches('/').to_string();
        if api_url == DEFAULT_API_URL {
            Ok(Environment::Local)
        } else {
            Ok(Environment::Custom { api_url })
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}
