use std::time::Duration;

use async_trait::async_trait;
use shared::protocol::{ConfirmationReceipt, SubmissionRequest};
use tracing::debug;

use crate::error::SubmitError;

/// Books a validated reservation. Implementations may take arbitrarily long;
/// the controller runs them on a spawned task so they can be aborted.
#[async_trait]
pub trait ReservationSubmitter: Send + Sync {
    async fn submit(&self, request: SubmissionRequest) -> Result<ConfirmationReceipt, SubmitError>;
}

/// Accepts every reservation after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl ReservationSubmitter for SimulatedSubmitter {
    async fn submit(&self, request: SubmissionRequest) -> Result<ConfirmationReceipt, SubmitError> {
        debug!(
            delay_ms = self.delay.as_millis() as u64,
            date = %request.draft.date,
            time = %request.draft.time,
            "simulating reservation booking"
        );
        tokio::time::sleep(self.delay).await;
        Ok(ConfirmationReceipt::issue_now())
    }
}
