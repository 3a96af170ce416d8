//! Explicit state object for the reservation intake flow.
//!
//! Every transition is a synchronous method; the async side (waiting on a
//! submitter) lives in [`crate::controller`] and feeds its outcome back through
//! [`ReservationWorkflow::complete_submit`].

use chrono::Utc;
use shared::{
    domain::{Field, PartySize, ReservationDraft, TimeSlot},
    error::FieldErrors,
    protocol::{ConfirmationReceipt, SubmissionRequest},
};
use tracing::{debug, info, warn};

use crate::{
    confirmation::ConfirmationView,
    error::{Phase, SubmitError, WorkflowError},
    form::FormState,
    validator::validate,
};

/// A booked reservation: the draft as it was submitted plus the receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub snapshot: ReservationDraft,
    pub receipt: ConfirmationReceipt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState {
    Editing,
    Submitting { snapshot: ReservationDraft },
    Confirmed(Confirmation),
}

impl WorkflowState {
    pub fn phase(&self) -> Phase {
        match self {
            WorkflowState::Editing => Phase::Editing,
            WorkflowState::Submitting { .. } => Phase::Submitting,
            WorkflowState::Confirmed(_) => Phase::Confirmed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the errors are also published on the form.
    Rejected(FieldErrors),
    Accepted(SubmissionRequest),
}

#[derive(Debug, Clone)]
pub struct ReservationWorkflow {
    form: FormState,
    state: WorkflowState,
    submission_error: Option<SubmitError>,
}

impl Default for ReservationWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationWorkflow {
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            state: WorkflowState::Editing,
            submission_error: None,
        }
    }

    pub fn draft(&self) -> &ReservationDraft {
        self.form.draft()
    }

    pub fn errors(&self) -> &FieldErrors {
        self.form.errors()
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Failure reported by the last submission attempt, if it did not book.
    pub fn submission_error(&self) -> Option<&SubmitError> {
        self.submission_error.as_ref()
    }

    pub fn can_submit(&self) -> bool {
        self.phase() == Phase::Editing
    }

    pub fn confirmation(&self) -> Option<ConfirmationView<'_>> {
        match &self.state {
            WorkflowState::Confirmed(confirmation) => Some(ConfirmationView::new(confirmation)),
            _ => None,
        }
    }

    pub fn set_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), WorkflowError> {
        self.ensure_editing()?;
        let cleared = self.form.set_field(field, value);
        self.submission_error = None;
        debug!(field = %field, cleared_error = cleared, "draft field updated");
        Ok(())
    }

    pub fn set_time(&mut self, slot: TimeSlot) -> Result<(), WorkflowError> {
        self.set_field(Field::Time, slot.label())
    }

    pub fn set_party_size(&mut self, size: PartySize) -> Result<(), WorkflowError> {
        self.set_field(Field::PartySize, size.value().to_string())
    }

    /// Validates the current draft. On success the draft is frozen into a
    /// snapshot and the workflow waits in `Submitting` for a submitter outcome.
    pub fn begin_submit(&mut self) -> Result<SubmitOutcome, WorkflowError> {
        match self.phase() {
            Phase::Editing => {}
            Phase::Submitting => return Err(WorkflowError::SubmissionInFlight),
            Phase::Confirmed => {
                return Err(WorkflowError::InvalidTransition {
                    from: Phase::Confirmed,
                    action: "submit",
                })
            }
        }

        let errors = validate(self.form.draft());
        self.form.publish_errors(errors.clone());
        self.submission_error = None;

        if !errors.is_empty() {
            info!(
                invalid_fields = errors.len(),
                "reservation submission rejected by validation"
            );
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let snapshot = self.form.draft().clone();
        info!(
            date = %snapshot.date,
            time = %snapshot.time,
            party_size = %snapshot.party_size,
            "reservation submission started"
        );
        let request = SubmissionRequest {
            draft: snapshot.clone(),
            requested_at: Utc::now(),
        };
        self.state = WorkflowState::Submitting { snapshot };
        Ok(SubmitOutcome::Accepted(request))
    }

    /// Applies the submitter's result. Success confirms the snapshot; failure
    /// returns to editing with the draft intact and the failure surfaced.
    pub fn complete_submit(
        &mut self,
        result: Result<ConfirmationReceipt, SubmitError>,
    ) -> Result<&WorkflowState, WorkflowError> {
        let WorkflowState::Submitting { snapshot } = &self.state else {
            return Err(WorkflowError::NoSubmissionInFlight);
        };

        match result {
            Ok(receipt) => {
                info!(reference = %receipt.reference, "reservation confirmed");
                self.state = WorkflowState::Confirmed(Confirmation {
                    snapshot: snapshot.clone(),
                    receipt,
                });
            }
            Err(err) => {
                warn!(code = ?err.code(), "reservation submission failed: {err}");
                self.state = WorkflowState::Editing;
                self.submission_error = Some(err);
            }
        }
        Ok(&self.state)
    }

    /// Abandons the in-flight submission. The draft is kept and the
    /// cancellation is surfaced as [`SubmitError::Cancelled`].
    pub fn cancel_submit(&mut self) -> Result<(), WorkflowError> {
        self.complete_submit(Err(SubmitError::Cancelled)).map(|_| ())
    }

    /// Discards the confirmation and starts over with a blank draft.
    pub fn reset(&mut self) -> Result<(), WorkflowError> {
        if self.phase() != Phase::Confirmed {
            return Err(WorkflowError::InvalidTransition {
                from: self.phase(),
                action: "reset",
            });
        }
        self.form.clear();
        self.state = WorkflowState::Editing;
        self.submission_error = None;
        debug!("reservation workflow reset");
        Ok(())
    }

    fn ensure_editing(&self) -> Result<(), WorkflowError> {
        match self.phase() {
            Phase::Editing => Ok(()),
            phase => Err(WorkflowError::NotEditing(phase)),
        }
    }
}

#[cfg(test)]
#[path = "tests/workflow_tests.rs"]
mod tests;
