use std::fmt;

use shared::{error::ErrorCode, protocol::SubmissionFailure};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Confirmed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Editing => f.write_str("editing"),
            Phase::Submitting => f.write_str("submitting"),
            Phase::Confirmed => f.write_str("confirmed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("draft can only be edited while editing (currently {0})")]
    NotEditing(Phase),
    #[error("a reservation submission is already in flight")]
    SubmissionInFlight,
    #[error("cannot {action} while {from}")]
    InvalidTransition { from: Phase, action: &'static str },
    #[error("no reservation submission is in flight")]
    NoSubmissionInFlight,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("reservation rejected: {0}")]
    Rejected(String),
    #[error("reservation service unavailable: {0}")]
    Unavailable(String),
    #[error("reservation submission cancelled")]
    Cancelled,
}

impl SubmitError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SubmitError::Rejected(_) => ErrorCode::Rejected,
            SubmitError::Unavailable(_) => ErrorCode::Unavailable,
            SubmitError::Cancelled => ErrorCode::Cancelled,
        }
    }
}

impl From<&SubmitError> for SubmissionFailure {
    fn from(value: &SubmitError) -> Self {
        SubmissionFailure::new(value.code(), value.to_string())
    }
}
