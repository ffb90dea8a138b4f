//! Outbound port receiving demo requests from the contact form.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::ContactRequest;

define_port_error! {
    /// Errors surfaced while handing a demo request to the lead endpoint.
    pub enum LeadCaptureError {
        /// The call did not complete in time.
        Timeout { message: String } => "lead capture timed out: {message}",
        /// The endpoint asked the caller to slow down.
        RateLimited { message: String } => "lead capture rate limited: {message}",
        /// The endpoint refused the request, e.g. failed its own validation.
        Rejected { message: String } => "lead capture rejected the request: {message}",
        /// Network or server fault.
        Transport { message: String } => "lead capture transport failed: {message}",
    }
}

/// Capability that accepts a validated [`ContactRequest`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadCapture: Send + Sync {
    /// Dispatch the request. Success means the lead was accepted.
    async fn submit(&self, request: &ContactRequest) -> Result<(), LeadCaptureError>;
}
