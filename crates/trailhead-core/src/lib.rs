//! Core library for the Trailhead trip planner.
//!
//! Trailhead turns a filled-in trip form into a request for a remote
//! itinerary-generation service and renders what comes back: a day-by-day
//! plan, a packing list and a cost-vs-budget summary.
//!
//! # Pipeline
//!
//! ```text
//! TripForm ──to_request──▶ TripRequest ──ItineraryService──▶ TripResponse
//!    (raw text)             (normalized)      (HTTP POST)       (validated)
//!                                  │                                │
//!                      SubmissionController ◀───────────────────────┘
//!                      Idle / Loading / Success / Error
//!                                  │
//!                            SubmissionView ──▶ markdown
//! ```
//!
//! - [`models`]: form, request and response types; the response type is the
//!   single validation point for service output
//! - [`service`]: the [`ItineraryService`] seam and its HTTP implementation
//! - [`controller`]: the single-flight submission state machine
//! - [`display`]: pure markdown rendering
//! - [`config`]: endpoint and timeout resolution
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trailhead_core::{ControllerBuilder, FormField, TripForm, display::SubmissionView};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let controller = ControllerBuilder::new()
//!     .with_endpoint(Some("http://localhost:8000/generate".to_string()))
//!     .build()?;
//!
//! let mut form = TripForm::default();
//! form.set(FormField::Destination, "Rome");
//! form.set(FormField::Duration, "3");
//! form.set(FormField::Interests, "art,food");
//!
//! let state = controller.submit_and_wait(&form).await;
//! println!("{}", SubmissionView(&state));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use config::ClientConfig;
pub use controller::{
    ControllerBuilder, Failure, StateWatcher, SubmissionController, SubmissionId,
    SubmissionState, ViewState,
};
pub use error::{FailureKind, Result, TripError};
pub use models::{
    Activity, CostSummary, Day, Entered, FormField, TripForm, TripRequest, TripResponse,
    split_list,
};
pub use service::{HttpItineraryService, ItineraryService};
