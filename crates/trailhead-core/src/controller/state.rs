//! States of the submission lifecycle.

use std::fmt;

use crate::{
    error::{FailureKind, TripError},
    models::TripResponse,
};

/// Identifies one call to [`super::SubmissionController::submit`].
///
/// Ids increase monotonically; the highest id is the one whose result may be
/// shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionId(pub(crate) u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What went wrong with a submission, kept in a form the view can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&TripError> for Failure {
    fn from(error: &TripError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

/// Lifecycle of the current submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A request is in flight; no earlier response is retained
    Loading,
    /// The latest submission resolved with a valid response
    Success(TripResponse),
    /// The latest submission failed; no response is retained
    Error(Failure),
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionState::Loading)
    }

    /// The stored response, present only in `Success`.
    pub fn response(&self) -> Option<&TripResponse> {
        match self {
            SubmissionState::Success(response) => Some(response),
            _ => None,
        }
    }

    /// The failure, present only in `Error`.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            SubmissionState::Error(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Loading => "loading",
            SubmissionState::Success(_) => "success",
            SubmissionState::Error(_) => "error",
        }
    }
}

/// Snapshot of the controller: the latest submission and its state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    /// Latest submission, `None` until the first submit
    pub submission: Option<SubmissionId>,
    pub state: SubmissionState,
}
