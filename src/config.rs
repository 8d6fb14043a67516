//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{fs, path::Path};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Coordinator base URL, overridden by the flag and the environment variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Paint a dark background behind the dashboard.
    #[serde(default)]
    pub with_background_color: bool,
}

impl Config {
    /// Create Config pointing at the given coordinator.
    pub fn new(api_url: Option<String>, with_background_color: bool) -> Self {
        Config {
            api_url,
            with_background_color,
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from_file(path)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Path of the dashboard config file: `~/.distributeai/dashboard.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "Failed to get home directory",
    ))?;
    Ok(home_path.join(".distributeai").join("dashboard.json"))
}

/// Config file to use: the explicit one, else the default one if a home directory is known.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| get_config_path().ok())
}

/// Load the config at `path`; without a path every setting takes its default.
pub fn load_config(path: Option<&Path>) -> Result<Config, std::io::Error> {
    match path {
        Some(path) => Config::load_or_default(path),
        None => Ok(Config::default()),
    }
}
