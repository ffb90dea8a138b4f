//! Reqwest-backed [`LeadCapture`].

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::status::{FailureClass, classify_status, classify_transport_error};
use crate::domain::ContactRequest;
use crate::domain::ports::{LeadCapture, LeadCaptureError};

/// Posts demo requests as camelCase JSON to a lead endpoint.
pub struct HttpLeadCapture {
    client: Client,
    endpoint: Url,
}

impl HttpLeadCapture {
    /// Build an adapter around a configured client.
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl LeadCapture for HttpLeadCapture {
    async fn submit(&self, request: &ContactRequest) -> Result<(), LeadCaptureError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|error| map_failure(classify_transport_error(&error)))?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "lead endpoint accepted request");
            return Ok(());
        }
        let body = response
            .bytes()
            .await
            .map_err(|error| map_failure(classify_transport_error(&error)))?;
        Err(map_failure(classify_status(status, body.as_ref())))
    }
}

fn map_failure(class: FailureClass) -> LeadCaptureError {
    match class {
        FailureClass::Unauthorized(message) | FailureClass::Rejected(message) => {
            LeadCaptureError::rejected(message)
        }
        FailureClass::Timeout(message) => LeadCaptureError::timeout(message),
        FailureClass::RateLimited(message) => LeadCaptureError::rate_limited(message),
        FailureClass::Transport(message) => LeadCaptureError::transport(message),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FailureClass::Unauthorized("status 403".to_owned()), LeadCaptureError::rejected("status 403"))]
    #[case(FailureClass::Rejected("status 422".to_owned()), LeadCaptureError::rejected("status 422"))]
    #[case(FailureClass::Timeout("status 504".to_owned()), LeadCaptureError::timeout("status 504"))]
    #[case(FailureClass::RateLimited("status 429".to_owned()), LeadCaptureError::rate_limited("status 429"))]
    #[case(FailureClass::Transport("status 500".to_owned()), LeadCaptureError::transport("status 500"))]
    fn failure_classes_map_to_lead_errors(
        #[case] class: FailureClass,
        #[case] expected: LeadCaptureError,
    ) {
        assert_eq!(map_failure(class), expected);
    }
}
