//! Data models for trip requests and generated itineraries.
//!
//! The models are split along the trust boundary with the generation service:
//!
//! - [`form`]: raw text of every input field, exactly as typed
//! - [`request`]: the normalized payload sent to the service, built from a
//!   form by [`TripForm::to_request`]
//! - [`response`]: the validated answer, produced only by
//!   [`TripResponse::from_slice`]
//!
//! Display implementations live in [`crate::display`] so the structures here
//! stay free of presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use trailhead_core::models::{FormField, TripForm};
//!
//! let mut form = TripForm::default();
//! form.set(FormField::Destination, "Rome");
//! form.set(FormField::Interests, "art,food");
//!
//! let request = form.to_request();
//! assert_eq!(request.interests, vec!["art", "food"]);
//! assert!(request.activities.is_empty());
//! ```

pub mod form;
pub mod request;
pub mod response;


pub use form::{FormField, TripForm};
pub use request::{Entered, TripRequest, split_list};
pub use response::{Activity, CostSummary, Day, TripResponse};
