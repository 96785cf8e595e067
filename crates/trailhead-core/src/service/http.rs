//! HTTP transport for the generation service.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use super::ItineraryService;
use crate::{
    config::ClientConfig,
    error::{Result, TripError},
    models::{TripRequest, TripResponse},
};

/// Posts requests as JSON to a fixed endpoint.
///
/// One POST per call, no retries. Any non-success status is a
/// `TripError::Service` and its body is never read.
#[derive(Debug, Clone)]
pub struct HttpItineraryService {
    http: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpItineraryService {
    /// Create a client for the configured endpoint and timeout.
    ///
    /// # Errors
    ///
    /// Returns `TripError::Transport` if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TripError::transport("Failed to build HTTP client").with_source(e))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            timeout: config.timeout,
        })
    }

    /// The URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, error: reqwest::Error) -> TripError {
        if error.is_timeout() {
            TripError::Timeout {
                elapsed: self.timeout,
            }
        } else {
            TripError::transport(format!("POST {} failed", self.endpoint)).with_source(error)
        }
    }
}

#[async_trait]
impl ItineraryService for HttpItineraryService {
    async fn generate(&self, request: &TripRequest) -> Result<TripResponse> {
        debug!("POST {} destination={:?}", self.endpoint, request.destination);

        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        debug!("{} answered {}", self.endpoint, status);
        if !status.is_success() {
            return Err(TripError::Service {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        TripResponse::from_slice(&body)
    }
}
