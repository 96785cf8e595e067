//! Builder for creating and configuring SubmissionController instances.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use super::SubmissionController;
use crate::{config::ClientConfig, error::Result, service::HttpItineraryService};

/// Builder for a controller that talks HTTP to the generation service.
#[derive(Debug, Clone, Default)]
pub struct ControllerBuilder {
    config_file: Option<PathBuf>,
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl ControllerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a configuration file to read instead of the XDG default.
    ///
    /// If not specified, `$XDG_CONFIG_HOME/trailhead/config.json` is used
    /// when it exists.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the endpoint from the configuration file.
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if endpoint.is_some() {
            self.endpoint = endpoint;
        }
        self
    }

    /// Overrides the request timeout from the configuration file.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        if timeout.is_some() {
            self.timeout = timeout;
        }
        self
    }

    /// Resolve the effective configuration without building a client.
    ///
    /// # Errors
    ///
    /// Returns `TripError::FileSystem`, `TripError::Serialization` or
    /// `TripError::Configuration` if the configuration cannot be loaded.
    pub fn config(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::load(self.config_file.as_deref())?;
        if let Some(endpoint) = &self.endpoint {
            config = config.with_endpoint(endpoint.clone());
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        config.validate()?;
        Ok(config)
    }

    /// Builds an idle controller.
    ///
    /// # Errors
    ///
    /// Returns any configuration error from [`ControllerBuilder::config`], or
    /// `TripError::Transport` if the HTTP client cannot be created.
    pub fn build(self) -> Result<SubmissionController<HttpItineraryService>> {
        let config = self.config()?;
        log::debug!(
            "Using endpoint {} with {}s timeout",
            config.endpoint,
            config.timeout.as_secs()
        );
        let service = HttpItineraryService::new(&config)?;
        Ok(SubmissionController::new(service))
    }
}
