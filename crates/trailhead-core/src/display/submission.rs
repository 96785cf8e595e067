//! Display of the controller state as a whole view.

use std::fmt;

use super::status::Notice;
use crate::controller::SubmissionState;

/// Renders whatever the current submission state calls for.
///
/// Loading never shows an earlier itinerary, and an error shows the banner
/// with no itinerary section at all.
pub struct SubmissionView<'a>(pub &'a SubmissionState);

impl fmt::Display for SubmissionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            SubmissionState::Idle => writeln!(f, "No itinerary yet. Fill in the form and submit."),
            SubmissionState::Loading => writeln!(f, "Generating..."),
            SubmissionState::Success(response) => write!(f, "{response}"),
            SubmissionState::Error(failure) => {
                write!(f, "{}", Notice::Failed(failure))?;
                writeln!(f)?;
                writeln!(f, "Adjust the form if needed and submit again.")
            }
        }
    }
}
