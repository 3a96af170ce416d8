//! Drives a [`ReservationWorkflow`] against a [`ReservationSubmitter`].

use std::sync::Arc;

use shared::{domain::Field, protocol::ConfirmationReceipt};
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::{
    confirmation::ConfirmationView,
    error::{Phase, SubmitError, WorkflowError},
    submitter::ReservationSubmitter,
    workflow::{ReservationWorkflow, SubmitOutcome, WorkflowState},
};

type SubmissionTask = JoinHandle<Result<ConfirmationReceipt, SubmitError>>;

pub struct SubmissionController {
    workflow: ReservationWorkflow,
    submitter: Arc<dyn ReservationSubmitter>,
    in_flight: Option<SubmissionTask>,
}

impl SubmissionController {
    pub fn new(submitter: Arc<dyn ReservationSubmitter>) -> Self {
        Self {
            workflow: ReservationWorkflow::new(),
            submitter,
            in_flight: None,
        }
    }

    pub fn workflow(&self) -> &ReservationWorkflow {
        &self.workflow
    }

    pub fn state(&self) -> &WorkflowState {
        self.workflow.state()
    }

    pub fn phase(&self) -> Phase {
        self.workflow.phase()
    }

    pub fn confirmation(&self) -> Option<ConfirmationView<'_>> {
        self.workflow.confirmation()
    }

    pub fn set_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), WorkflowError> {
        self.workflow.set_field(field, value)
    }

    /// Validates and, when the draft is acceptable, hands the snapshot to the
    /// submitter on a background task. Must be called inside a tokio runtime.
    pub fn submit(&mut self) -> Result<SubmitOutcome, WorkflowError> {
        let outcome = self.workflow.begin_submit()?;
        if let SubmitOutcome::Accepted(request) = &outcome {
            let submitter = Arc::clone(&self.submitter);
            let request = request.clone();
            self.in_flight = Some(tokio::spawn(async move { submitter.submit(request).await }));
            debug!("reservation submission task spawned");
        }
        Ok(outcome)
    }

    /// Waits for the in-flight submission and applies its result.
    ///
    /// Dropping this future before it resolves leaves the submission running,
    /// so it can still be awaited again or cancelled.
    pub async fn wait(&mut self) -> Result<Phase, WorkflowError> {
        let task = self
            .in_flight
            .as_mut()
            .ok_or(WorkflowError::NoSubmissionInFlight)?;
        let joined = task.await;
        self.in_flight = None;

        let result = match joined {
            Ok(result) => result,
            // `cancel` takes the handle first, so this is an abort from elsewhere
            // such as runtime shutdown.
            Err(err) if err.is_cancelled() => Err(SubmitError::Cancelled),
            Err(err) => {
                error!("reservation submission task failed: {err}");
                Err(SubmitError::Unavailable(format!("submission task failed: {err}")))
            }
        };
        Ok(self.workflow.complete_submit(result)?.phase())
    }

    /// Aborts the in-flight submission and returns to editing with the draft
    /// kept and [`SubmitError::Cancelled`] as the submission error.
    pub fn cancel(&mut self) -> Result<(), WorkflowError> {
        let task = self
            .in_flight
            .take()
            .ok_or(WorkflowError::NoSubmissionInFlight)?;
        task.abort();
        self.workflow.cancel_submit()
    }

    pub fn reset(&mut self) -> Result<(), WorkflowError> {
        self.workflow.reset()
    }
}

impl Drop for SubmissionController {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
