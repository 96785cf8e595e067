//! Display formatting for requests, itineraries and submission states.
//!
//! Everything here formats as markdown so the CLI can hand it to its
//! terminal renderer unchanged.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ SubmissionState │    │ SubmissionView  │    │    Markdown     │
//! │  TripResponse   │───▶│ Display impls   │───▶│     output      │
//! │  TripRequest    │    │                 │    │   (terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`itinerary`]: the itinerary, packing list and cost summary
//! - [`submission`]: the whole view for a given state (SubmissionView)
//! - [`request`]: preview of the normalized request
//! - [`status`]: one-line notices about submissions and input (Notice)
//! - [`datetime`]: timestamp formatting
//!
//! All formatters are pure: rendering the same value twice yields the same
//! text.
//!
//! ```rust
//! use trailhead_core::{display::SubmissionView, SubmissionState};
//!
//! let output = SubmissionView(&SubmissionState::Loading).to_string();
//! assert_eq!(output, "Generating...\n");
//! ```

pub mod datetime;
pub mod itinerary;
pub mod request;
pub mod status;
pub mod submission;

pub use datetime::LocalDateTime;
pub use itinerary::Amount;
pub use status::Notice;
pub use submission::SubmissionView;
