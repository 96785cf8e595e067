//! Client configuration: where the generation service lives and how long to
//! wait for it.
//!
//! Values resolve in three layers: built-in defaults, then an optional JSON
//! file, then explicit overrides from the caller.
//!
//! ```json
//! { "endpoint": "https://planner.example.com/generate", "timeout_secs": 90 }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;

use crate::error::{Result, TripError};

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/generate";

/// Request timeout used when nothing else is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Resolved settings for talking to the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

/// On-disk shape of the configuration file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load defaults overlaid with the given JSON file.
    ///
    /// # Errors
    ///
    /// Returns `TripError::FileSystem` if the file cannot be read,
    /// `TripError::Serialization` if it is not valid JSON of the expected
    /// shape, and `TripError::Configuration` if a value is unusable.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| TripError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file: ConfigFile = serde_json::from_str(&text)?;

        let mut config = Self::default();
        if let Some(endpoint) = file.endpoint {
            config = config.with_endpoint(endpoint);
        }
        if let Some(secs) = file.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit file, else from the XDG config file if one
    /// exists, else fall back to defaults.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`ClientConfig::from_file`].
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit.map(Path::to_path_buf).or_else(Self::default_config_path) {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Replace the endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replace the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check that the settings can be used to make a request.
    ///
    /// # Errors
    ///
    /// Returns `TripError::Configuration` for an empty endpoint or a zero
    /// timeout.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(TripError::configuration("endpoint must not be empty"));
        }
        if self.timeout.is_zero() {
            return Err(TripError::configuration("timeout must be greater than zero"));
        }
        Ok(())
    }

    /// `$XDG_CONFIG_HOME/trailhead/config.json`, if present.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("trailhead").find_config_file("config.json")
    }
}
