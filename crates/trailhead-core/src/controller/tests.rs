//! Tests for the submission controller.

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::*;
use crate::{
    error::{FailureKind, TripError},
    models::{Activity, CostSummary, Day, FormField},
};

type Reply = Result<TripResponse>;

/// Service whose answers are released by the test, keyed by destination.
#[derive(Default)]
struct ScriptedService {
    pending: Mutex<HashMap<String, oneshot::Receiver<Reply>>>,
    calls: AtomicUsize,
}

impl ScriptedService {
    fn script(&self, destination: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.pending
            .lock()
            .unwrap()
            .insert(destination.to_string(), rx);
        tx
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItineraryService for ScriptedService {
    async fn generate(&self, request: &TripRequest) -> Result<TripResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let rx = self.pending.lock().unwrap().remove(&request.destination);
        match rx {
            Some(rx) => rx.await.unwrap_or(Err(TripError::Service { status: 599 })),
            None => Err(TripError::malformed("unscripted destination")),
        }
    }
}

fn trip_response(summary: &str, total: f64) -> TripResponse {
    TripResponse {
        itinerary: vec![Day {
            day: 1,
            summary: summary.to_string(),
            date: None,
            meals: vec![],
            activities: vec![Activity {
                time: "09:00".to_string(),
                description: format!("{summary} walking tour"),
                estimated_cost: Some(total),
            }],
        }],
        packing_list: vec![format!("{summary} guidebook")],
        cost_summary: CostSummary {
            estimated_total: total,
            budget: 1000.0,
            packing_list_cost: 2.0,
            within_budget: total <= 1000.0,
            currency: "USD".to_string(),
        },
        group_size: 2,
    }
}

fn form_for(destination: &str) -> TripForm {
    let mut form = TripForm::default();
    form.set(FormField::Destination, destination);
    form
}

fn controller() -> SubmissionController<ScriptedService> {
    SubmissionController::new(ScriptedService::default())
}

#[tokio::test]
async fn test_starts_idle() {
    let controller = controller();
    assert_eq!(controller.state(), SubmissionState::Idle);
    assert_eq!(controller.view().submission, None);
    assert_eq!(controller.settled().await, SubmissionState::Idle);
}

#[tokio::test]
async fn test_submit_enters_loading_then_success() {
    let controller = controller();
    let reply = controller.service().script("Rome");

    let id = controller.submit(&form_for("Rome"));
    assert_eq!(controller.state(), SubmissionState::Loading);
    assert_eq!(controller.view().submission, Some(id));

    reply.send(Ok(trip_response("Rome", 850.0))).unwrap();
    let state = controller.settled().await;

    assert_eq!(state, SubmissionState::Success(trip_response("Rome", 850.0)));
    assert_eq!(controller.service().calls(), 1);
}

#[tokio::test]
async fn test_failure_enters_error_without_response() {
    let controller = controller();
    let reply = controller.service().script("Rome");

    controller.submit(&form_for("Rome"));
    reply.send(Err(TripError::Service { status: 500 })).unwrap();

    let state = controller.settled().await;
    let failure = state.failure().expect("expected error state");
    assert_eq!(failure.kind, FailureKind::Service);
    assert!(failure.message.contains("500"));
    assert!(state.response().is_none());
}

#[tokio::test]
async fn test_error_is_reenterable() {
    let controller = controller();

    let reply = controller.service().script("Rome");
    controller.submit(&form_for("Rome"));
    reply.send(Err(TripError::malformed("bad body"))).unwrap();
    assert!(controller.settled().await.failure().is_some());

    let reply = controller.service().script("Rome");
    controller.submit(&form_for("Rome"));
    assert!(controller.state().is_loading());
    reply.send(Ok(trip_response("Rome", 850.0))).unwrap();
    assert!(controller.settled().await.response().is_some());
}

#[tokio::test]
async fn test_submit_clears_previous_response() {
    let controller = controller();

    let reply = controller.service().script("Rome");
    controller.submit(&form_for("Rome"));
    reply.send(Ok(trip_response("Rome", 850.0))).unwrap();
    assert!(controller.settled().await.response().is_some());

    let _pending = controller.service().script("Paris");
    controller.submit(&form_for("Paris"));
    let state = controller.state();
    assert!(state.is_loading());
    assert!(state.response().is_none());
}

#[tokio::test]
async fn test_new_response_replaces_old_wholesale() {
    let controller = controller();

    let reply = controller.service().script("Rome");
    controller.submit(&form_for("Rome"));
    reply.send(Ok(trip_response("Rome", 850.0))).unwrap();
    controller.settled().await;

    let mut paris = trip_response("Paris", 1200.0);
    paris.packing_list.clear();
    let reply = controller.service().script("Paris");
    controller.submit(&form_for("Paris"));
    reply.send(Ok(paris.clone())).unwrap();

    let state = controller.settled().await;
    let response = state.response().unwrap();
    assert_eq!(response, &paris);
    assert!(response.packing_list.is_empty());
    assert!(!response.cost_summary.within_budget);
}

#[tokio::test]
async fn test_last_submitted_wins() {
    let controller = controller();
    let rome = controller.service().script("Rome");
    let paris = controller.service().script("Paris");

    let first = controller.submit(&form_for("Rome"));
    let second = controller.submit(&form_for("Paris"));
    assert!(second > first);

    paris.send(Ok(trip_response("Paris", 900.0))).unwrap();
    // The superseded request may or may not still be listening.
    let _ = rome.send(Ok(trip_response("Rome", 850.0)));

    let state = controller.settled().await;
    assert_eq!(state.response().unwrap().itinerary[0].summary, "Paris");

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(
        controller.state().response().unwrap().itinerary[0].summary,
        "Paris"
    );
    assert_eq!(controller.view().submission, Some(second));
}

#[tokio::test]
async fn test_stale_result_is_discarded() {
    let controller = controller();
    let _rome = controller.service().script("Rome");
    let _paris = controller.service().script("Paris");

    let stale = controller.submit(&form_for("Rome"));
    let current = controller.submit(&form_for("Paris"));

    resolve(
        &controller.view,
        stale,
        &form_for("Rome").to_request(),
        Ok(trip_response("Rome", 850.0)),
    );
    assert!(controller.state().is_loading());

    resolve(
        &controller.view,
        current,
        &form_for("Paris").to_request(),
        Ok(trip_response("Paris", 900.0)),
    );
    assert_eq!(
        controller.state().response().unwrap().itinerary[0].summary,
        "Paris"
    );
}

#[tokio::test]
async fn test_identical_submissions_are_independent() {
    let controller = controller();
    let form = form_for("Rome");

    let reply = controller.service().script("Rome");
    let first = controller.submit(&form);
    reply.send(Ok(trip_response("Rome", 850.0))).unwrap();
    controller.settled().await;

    let reply = controller.service().script("Rome");
    let second = controller.submit(&form);
    reply.send(Ok(trip_response("Rome", 850.0))).unwrap();
    controller.settled().await;

    assert_ne!(first, second);
    assert_eq!(controller.service().calls(), 2);
}

#[tokio::test]
async fn test_watcher_observes_transitions() {
    let controller = controller();
    let mut watcher = controller.subscribe();
    assert_eq!(watcher.current().state, SubmissionState::Idle);

    let reply = controller.service().script("Rome");
    controller.submit(&form_for("Rome"));
    assert!(watcher.changed().await);
    assert!(watcher.current().state.is_loading());

    reply.send(Ok(trip_response("Rome", 850.0))).unwrap();
    assert!(watcher.changed().await);
    assert!(watcher.current().state.response().is_some());
}

#[tokio::test]
async fn test_inconsistent_summary_is_still_stored() {
    let controller = controller();
    let mut response = trip_response("Rome", 850.0);
    response.cost_summary.within_budget = false;

    let reply = controller.service().script("Rome");
    controller.submit(&form_for("Rome"));
    reply.send(Ok(response.clone())).unwrap();

    assert_eq!(controller.settled().await, SubmissionState::Success(response));
}
