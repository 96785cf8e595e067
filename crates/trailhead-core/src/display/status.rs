//! One-line notices printed around the submission view.

use std::fmt;

use crate::controller::{Failure, SubmissionId};

/// A short message about something that just happened.
///
/// Error notices start with `Error:` so they stand out in plain output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice<'a> {
    /// A request was handed to the service
    Submitted {
        id: SubmissionId,
        destination: &'a str,
    },
    /// The current submission ended in an error
    Failed(&'a Failure),
    /// Input that could not be applied, such as an unknown command
    Rejected(String),
}

impl fmt::Display for Notice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Submitted { id, destination } if destination.is_empty() => {
                writeln!(f, "Submitted request {id} with no destination")
            }
            Notice::Submitted { id, destination } => {
                writeln!(f, "Submitted request {id} for {destination}")
            }
            Notice::Failed(failure) => writeln!(
                f,
                "Error: Could not generate an itinerary ({}): {}",
                failure.kind.as_str(),
                failure.message
            ),
            Notice::Rejected(message) => writeln!(f, "Error: {message}"),
        }
    }
}
