//! Lead capture that pretends to call a backend.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ContactRequest;
use crate::domain::ports::{LeadCapture, LeadCaptureError, Sleeper, TokioSleeper};

/// Simulated network round trip for demo requests.
pub const DEFAULT_CONTACT_LATENCY: Duration = Duration::from_millis(1000);

/// Waits a fixed delay, logs the request, and reports success.
pub struct SimulatedLeadCapture {
    latency: Duration,
    sleeper: Arc<dyn Sleeper>,
}

impl Default for SimulatedLeadCapture {
    fn default() -> Self {
        Self {
            latency: DEFAULT_CONTACT_LATENCY,
            sleeper: Arc::new(TokioSleeper),
        }
    }
}

impl SimulatedLeadCapture {
    /// Override the simulated round trip.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Override how the round trip is waited out.
    #[must_use]
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }
}

#[async_trait]
impl LeadCapture for SimulatedLeadCapture {
    async fn submit(&self, request: &ContactRequest) -> Result<(), LeadCaptureError> {
        self.sleeper.sleep(self.latency).await;
        info!(
            organization = request.organization(),
            expected_users = request.expected_users(),
            "demo request received"
        );
        Ok(())
    }
}
