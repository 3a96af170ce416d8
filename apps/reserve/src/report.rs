//! Printable outcomes of `validate` and `book`.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use reservation_core::ConfirmationView;
use serde::Serialize;
use shared::{
    error::{ErrorCode, FieldErrors},
    protocol::SubmissionFailure,
};

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BookingReport {
    Invalid {
        code: ErrorCode,
        errors: FieldErrors,
    },
    Confirmed {
        reference: String,
        date: String,
        time: String,
        party_size: String,
        name: String,
        confirmed_at: DateTime<Utc>,
    },
    Failed {
        failure: SubmissionFailure,
    },
}

impl BookingReport {
    pub fn invalid(errors: &FieldErrors) -> Self {
        Self::Invalid {
            code: ErrorCode::Validation,
            errors: errors.clone(),
        }
    }

    pub fn confirmed(view: &ConfirmationView<'_>) -> Self {
        Self::Confirmed {
            reference: view.reference(),
            date: view.date().to_string(),
            time: view.time().to_string(),
            party_size: view.party_size_label(),
            name: view.full_name(),
            confirmed_at: view.confirmed_at(),
        }
    }

    pub fn failed(failure: SubmissionFailure) -> Self {
        Self::Failed { failure }
    }

    /// Only a confirmed booking exits successfully.
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Confirmed { .. } => Ok(()),
            Self::Invalid { errors, .. } => {
                bail!("reservation has {} invalid field(s)", errors.len())
            }
            Self::Failed { failure } => bail!("reservation was not booked: {}", failure.message),
        }
    }
}

/// One `field: message` line per invalid field, in form order.
pub fn render_field_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("\n")
}
