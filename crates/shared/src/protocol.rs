use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{domain::ReservationDraft, error::ErrorCode};

/// Payload handed to a reservation submitter once a draft passes validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub draft: ReservationDraft,
    pub requested_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationReceipt {
    pub reference: Uuid,
    pub confirmed_at: DateTime<Utc>,
}

impl ConfirmationReceipt {
    pub fn issue_now() -> Self {
        Self {
            reference: Uuid::new_v4(),
            confirmed_at: Utc::now(),
        }
    }

    /// Short upper-case code shown to guests.
    pub fn short_code(&self) -> String {
        self.reference.simple().to_string()[..8].to_ascii_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionFailure {
    pub code: ErrorCode,
    pub message: String,
}

impl SubmissionFailure {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
