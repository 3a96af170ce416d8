use super::*;
use async_trait::async_trait;
use shared::protocol::SubmissionRequest;
use std::{sync::Mutex, time::Duration};

use crate::submitter::SimulatedSubmitter;

struct RecordingSubmitter {
    fail_with: Option<SubmitError>,
    seen: Mutex<Vec<SubmissionRequest>>,
}

impl RecordingSubmitter {
    fn ok() -> Self {
        Self {
            fail_with: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn failing(err: SubmitError) -> Self {
        Self {
            fail_with: Some(err),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn seen(&self) -> Vec<SubmissionRequest> {
        self.seen.lock().expect("seen lock").clone()
    }
}

#[async_trait]
impl ReservationSubmitter for RecordingSubmitter {
    async fn submit(&self, request: SubmissionRequest) -> Result<ConfirmationReceipt, SubmitError> {
        self.seen.lock().expect("seen lock").push(request);
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(ConfirmationReceipt::issue_now()),
        }
    }
}

fn fill_valid(controller: &mut SubmissionController) {
    for (field, value) in [
        (Field::Date, "Sat, Oct 17"),
        (Field::Time, "7:00 PM"),
        (Field::PartySize, "2"),
        (Field::FirstName, "Ana"),
        (Field::LastName, "Lee"),
        (Field::Email, "a@b.com"),
        (Field::Phone, "555"),
    ] {
        controller.set_field(field, value).expect("editing");
    }
}

#[tokio::test(start_paused = true)]
async fn simulated_delay_moves_submitting_to_confirmed() {
    let delay = Duration::from_millis(2000);
    let mut controller = SubmissionController::new(Arc::new(SimulatedSubmitter::new(delay)));
    fill_valid(&mut controller);
    let draft = controller.workflow().draft().clone();

    let outcome = controller.submit().expect("submit");
    assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
    assert_eq!(controller.phase(), Phase::Submitting);
    assert_eq!(
        controller.submit().map(|_| ()),
        Err(WorkflowError::SubmissionInFlight)
    );

    let started = tokio::time::Instant::now();
    assert_eq!(controller.wait().await, Ok(Phase::Confirmed));
    assert!(started.elapsed() >= delay);

    let view = controller.confirmation().expect("confirmation");
    assert_eq!(view.snapshot(), &draft);
    assert_eq!(view.party_size_label(), "2 Guests");
}

#[tokio::test]
async fn invalid_draft_never_spawns_a_submission() {
    let submitter = Arc::new(RecordingSubmitter::ok());
    let mut controller = SubmissionController::new(submitter.clone());
    controller.set_field(Field::Email, "bad-email").expect("edit");

    let outcome = controller.submit().expect("submit");
    let SubmitOutcome::Rejected(errors) = outcome else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.get(Field::Email), Some("Please enter a valid email"));
    assert_eq!(controller.phase(), Phase::Editing);
    assert_eq!(
        controller.wait().await,
        Err(WorkflowError::NoSubmissionInFlight)
    );
    assert!(submitter.seen().is_empty());
}

#[tokio::test]
async fn submitter_receives_the_frozen_snapshot() {
    let submitter = Arc::new(RecordingSubmitter::ok());
    let mut controller = SubmissionController::new(submitter.clone());
    fill_valid(&mut controller);
    controller
        .set_field(Field::SpecialRequests, "Window seat, anniversary")
        .expect("edit");

    controller.submit().expect("submit");
    controller.wait().await.expect("wait");

    let seen = submitter.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].draft.special_requests, "Window seat, anniversary");
    assert_eq!(&seen[0].draft, controller.workflow().draft());
}

#[tokio::test]
async fn failing_submitter_surfaces_error_and_keeps_draft() {
    let submitter = Arc::new(RecordingSubmitter::failing(SubmitError::Rejected(
        "fully booked".into(),
    )));
    let mut controller = SubmissionController::new(submitter);
    fill_valid(&mut controller);

    controller.submit().expect("submit");
    assert_eq!(controller.wait().await, Ok(Phase::Editing));
    assert_eq!(
        controller.workflow().submission_error(),
        Some(&SubmitError::Rejected("fully booked".into()))
    );
    assert_eq!(controller.workflow().draft().first_name, "Ana");
}

#[tokio::test(start_paused = true)]
async fn cancel_aborts_in_flight_submission() {
    let mut controller = SubmissionController::new(Arc::new(SimulatedSubmitter::new(
        Duration::from_secs(30),
    )));
    fill_valid(&mut controller);
    controller.submit().expect("submit");

    let timed_out = tokio::time::timeout(Duration::from_millis(100), controller.wait()).await;
    assert!(timed_out.is_err());
    assert_eq!(controller.phase(), Phase::Submitting);

    controller.cancel().expect("cancel");
    assert_eq!(controller.phase(), Phase::Editing);
    assert_eq!(
        controller.workflow().submission_error(),
        Some(&SubmitError::Cancelled)
    );
    assert_eq!(controller.workflow().draft().last_name, "Lee");
    assert_eq!(
        controller.cancel(),
        Err(WorkflowError::NoSubmissionInFlight)
    );
    assert_eq!(
        controller.wait().await,
        Err(WorkflowError::NoSubmissionInFlight)
    );

    controller.set_field(Field::Phone, "556").expect("editable again");
}

#[tokio::test(start_paused = true)]
async fn reset_after_confirmation_starts_a_fresh_draft() {
    let mut controller =
        SubmissionController::new(Arc::new(SimulatedSubmitter::new(Duration::from_millis(10))));
    fill_valid(&mut controller);
    controller.submit().expect("submit");
    controller.wait().await.expect("wait");

    controller.reset().expect("reset");
    assert_eq!(controller.state(), &WorkflowState::Editing);
    assert!(controller.workflow().draft().is_blank());
    assert!(controller.confirmation().is_none());
}
