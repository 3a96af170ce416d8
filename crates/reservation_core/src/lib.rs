//! Reservation intake: draft editing, validation, simulated booking and the
//! confirmation projection, with no rendering attached.

pub mod calendar;
pub mod confirmation;
pub mod controller;
pub mod error;
pub mod form;
pub mod submitter;
pub mod validator;
pub mod workflow;

pub use confirmation::{guest_count_label, ConfirmationView};
pub use controller::SubmissionController;
pub use error::{Phase, SubmitError, WorkflowError};
pub use form::FormState;
pub use submitter::{ReservationSubmitter, SimulatedSubmitter};
pub use validator::validate;
pub use workflow::{Confirmation, ReservationWorkflow, SubmitOutcome, WorkflowState};
