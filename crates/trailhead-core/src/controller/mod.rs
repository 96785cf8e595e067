//! Submission controller: owns the request lifecycle and the view state.
//!
//! The controller is the only writer of the view state. Everyone else reads
//! it through [`SubmissionController::state`], [`SubmissionController::settled`]
//! or a [`StateWatcher`].
//!
//! ```text
//!            submit                  Ok(response)
//!   Idle ───────────▶ Loading ─────────────────────▶ Success
//!    ▲                  │  ▲                           │
//!    │                  │  └────────── submit ─────────┤
//!    │                  │ Err(..)                      │
//!    │                  ▼                              │
//!    │                Error ◀──────────────────────────┘
//!    └── (never returns to Idle)     submit ──▶ Loading
//! ```
//!
//! # Single flight
//!
//! Only the most recently submitted request may change the state. A submit
//! while loading aborts the previous call, and a result that still arrives
//! for a superseded id is discarded, so the view never shows an earlier
//! response after a later submit.
//!
//! # Examples
//!
//! ```rust,no_run
//! use trailhead_core::{ControllerBuilder, FormField, TripForm};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let controller = ControllerBuilder::new().build()?;
//!
//! let mut form = TripForm::default();
//! form.set(FormField::Destination, "Rome");
//!
//! let state = controller.submit_and_wait(&form).await;
//! if let Some(response) = state.response() {
//!     println!("{response}");
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, error, info, warn};
use tokio::{sync::watch, task::JoinHandle};

pub mod builder;
pub mod state;

#[cfg(test)]
mod tests;

pub use builder::ControllerBuilder;
pub use state::{Failure, SubmissionId, SubmissionState, ViewState};

use crate::{
    error::Result,
    models::{TripForm, TripRequest, TripResponse},
    service::ItineraryService,
};

/// Drives submissions against an [`ItineraryService`].
pub struct SubmissionController<S> {
    service: Arc<S>,
    view: Arc<watch::Sender<ViewState>>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl<S> SubmissionController<S>
where
    S: ItineraryService + 'static,
{
    /// Create an idle controller around a service.
    pub fn new(service: S) -> Self {
        let (view, _) = watch::channel(ViewState::default());
        Self {
            service: Arc::new(service),
            view: Arc::new(view),
            in_flight: Mutex::new(None),
        }
    }

    /// The service requests are sent to.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Submit the current form.
    ///
    /// Builds a fresh request, drops any previous response, enters `Loading`
    /// and starts the call in the background. Returns immediately.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn submit(&self, form: &TripForm) -> SubmissionId {
        let request = form.to_request();

        // Held across id allocation and spawn so concurrent submits agree on
        // which task is the latest.
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);

        let mut id = SubmissionId(0);
        self.view.send_modify(|view| {
            id = SubmissionId(view.submission.map_or(1, |prev| prev.0 + 1));
            view.submission = Some(id);
            view.state = SubmissionState::Loading;
        });
        debug!("Submission {id}: loading ({})", request.destination);

        let service = Arc::clone(&self.service);
        let view = Arc::clone(&self.view);
        let task = tokio::spawn(async move {
            let outcome = service.generate(&request).await;
            resolve(&view, id, &request, outcome);
        });

        if let Some(previous) = in_flight.replace(task)
            && !previous.is_finished()
        {
            info!("Submission {id} supersedes an in-flight request");
            previous.abort();
        }

        id
    }

    /// Current snapshot of the state.
    pub fn state(&self) -> SubmissionState {
        self.view.borrow().state.clone()
    }

    /// Current snapshot including the latest submission id.
    pub fn view(&self) -> ViewState {
        self.view.borrow().clone()
    }

    /// Wait until no request is in flight and return the resulting state.
    pub async fn settled(&self) -> SubmissionState {
        let mut rx = self.view.subscribe();
        match rx.wait_for(|view| !view.state.is_loading()).await {
            Ok(view) => view.state.clone(),
            Err(_) => self.state(),
        }
    }

    /// Submit and wait for the outcome.
    ///
    /// If another submission supersedes this one in the meantime, the
    /// superseding outcome is returned.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub async fn submit_and_wait(&self, form: &TripForm) -> SubmissionState {
        self.submit(form);
        self.settled().await
    }

    /// Read-only subscription to state changes.
    pub fn subscribe(&self) -> StateWatcher {
        StateWatcher {
            rx: self.view.subscribe(),
        }
    }
}

impl<S> Drop for SubmissionController<S> {
    fn drop(&mut self) {
        let in_flight = self
            .in_flight
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = in_flight.take() {
            task.abort();
        }
    }
}

/// Apply the outcome of submission `id`, unless a later submit replaced it.
fn resolve(
    view: &watch::Sender<ViewState>,
    id: SubmissionId,
    request: &TripRequest,
    outcome: Result<TripResponse>,
) {
    let next = match outcome {
        Ok(response) => {
            if !response.cost_summary.is_consistent() {
                warn!(
                    "Submission {id}: within_budget={} disagrees with total {} vs budget {}",
                    response.cost_summary.within_budget,
                    response.cost_summary.estimated_total,
                    response.cost_summary.budget
                );
            }
            if response.cost_summary.currency != request.budget_currency {
                debug!(
                    "Submission {id}: response currency {} differs from requested {}",
                    response.cost_summary.currency, request.budget_currency
                );
            }
            debug!(
                "Submission {id}: success, {} days, {} activities",
                response.itinerary.len(),
                response.activity_count()
            );
            SubmissionState::Success(response)
        }
        Err(e) => {
            error!("Submission {id} failed: {e}");
            SubmissionState::Error((&e).into())
        }
    };

    let applied = view.send_if_modified(move |view| {
        if view.submission != Some(id) {
            return false;
        }
        view.state = next;
        true
    });

    if !applied {
        info!("Submission {id} was superseded; discarding its result");
    }
}

/// Read-only view of the controller's state.
pub struct StateWatcher {
    rx: watch::Receiver<ViewState>,
}

impl StateWatcher {
    /// Latest snapshot, marking it as seen.
    pub fn current(&mut self) -> ViewState {
        self.rx.borrow_and_update().clone()
    }

    /// Wait for the next state change.
    ///
    /// Returns `false` once the controller is gone.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
