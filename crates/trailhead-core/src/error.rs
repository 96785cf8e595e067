//! Error types for the trip planning library.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Comprehensive error type for all trip planning operations.
#[derive(Error, Debug)]
pub enum TripError {
    /// Network-level failure talking to the generation service
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The generation service did not answer within the configured timeout
    #[error("Request timed out after {}s", .elapsed.as_secs())]
    Timeout { elapsed: Duration },
    /// The generation service answered with a non-success status
    #[error("Generation service returned HTTP {status}")]
    Service { status: u16 },
    /// The response body does not have the itinerary shape
    #[error("Malformed response: {reason}")]
    MalformedResponse { reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Coarse classification of a failed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network unreachable, connection reset, timeout
    Transport,
    /// Non-success status from the service
    Service,
    /// Structurally invalid payload
    Malformed,
    /// Anything raised on this side of the wire
    Internal,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::Service => "service",
            FailureKind::Malformed => "malformed response",
            FailureKind::Internal => "internal",
        }
    }
}

/// Builder for creating transport errors with optional context.
pub struct TransportErrorBuilder {
    message: String,
}

impl TransportErrorBuilder {
    /// Create a new transport error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: reqwest::Error) -> TripError {
        TripError::Transport {
            message: self.message,
            source,
        }
    }
}

impl TripError {
    /// Creates a builder for transport errors.
    pub fn transport(message: impl Into<String>) -> TransportErrorBuilder {
        TransportErrorBuilder::new(message)
    }

    /// Creates a malformed response error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Classify the error for the submission state machine.
    pub fn kind(&self) -> FailureKind {
        match self {
            TripError::Transport { .. } | TripError::Timeout { .. } => FailureKind::Transport,
            TripError::Service { .. } => FailureKind::Service,
            TripError::MalformedResponse { .. } => FailureKind::Malformed,
            TripError::Serialization { .. }
            | TripError::FileSystem { .. }
            | TripError::Configuration { .. } => FailureKind::Internal,
        }
    }
}

/// Result type alias for trip planning operations
pub type Result<T> = std::result::Result<T, TripError>;
