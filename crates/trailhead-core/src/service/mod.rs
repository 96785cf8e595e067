//! The boundary to the itinerary-generation service.
//!
//! The service is opaque: it may be a language model, a rule engine, or a
//! person. All the client relies on is the contract of
//! [`ItineraryService::generate`]: one request in, one validated
//! [`TripResponse`] or one [`crate::TripError`] out.

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{TripRequest, TripResponse},
};

pub mod http;

pub use http::HttpItineraryService;

/// A single-shot itinerary generator.
///
/// Every call is independent: identical requests are sent twice, never
/// deduplicated or cached.
#[async_trait]
pub trait ItineraryService: Send + Sync {
    /// Generate an itinerary for the request.
    ///
    /// Implementations make exactly one attempt.
    async fn generate(&self, request: &TripRequest) -> Result<TripResponse>;
}
