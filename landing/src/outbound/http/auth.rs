//! Reqwest-backed [`Authenticator`].

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::status::{FailureClass, classify_status, classify_transport_error};
use crate::domain::ports::{AuthError, Authenticator};
use crate::domain::{Authentication, Identity, LoginCredentials};

#[derive(Serialize)]
struct LoginRequestDto<'a> {
    email: &'a str,
    password: &'a str,
}

/// Response body. `identity` is absent when the account has no dashboard.
#[derive(Deserialize)]
struct LoginResponseDto {
    #[serde(default)]
    identity: Option<Identity>,
}

/// Posts credentials as JSON to an authentication endpoint.
pub struct HttpAuthenticator {
    client: Client,
    endpoint: Url,
}

impl HttpAuthenticator {
    /// Build an adapter around a configured client.
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Authentication, AuthError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&LoginRequestDto {
                email: credentials.email(),
                password: credentials.password(),
            })
            .send()
            .await
            .map_err(|error| map_failure(classify_transport_error(&error)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|error| map_failure(classify_transport_error(&error)))?;
        if !status.is_success() {
            return Err(map_failure(classify_status(status, body.as_ref())));
        }
        debug!(status = status.as_u16(), "authentication endpoint answered");
        parse_authentication(body.as_ref())
    }
}

fn parse_authentication(body: &[u8]) -> Result<Authentication, AuthError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Authentication::Anonymous);
    }
    let decoded: LoginResponseDto = serde_json::from_slice(body).map_err(|error| {
        AuthError::transport(format!("invalid authentication payload: {error}"))
    })?;
    Ok(match decoded.identity {
        Some(identity) => Authentication::Identified(identity),
        None => Authentication::Anonymous,
    })
}

fn map_failure(class: FailureClass) -> AuthError {
    match class {
        FailureClass::Unauthorized(_) => AuthError::invalid_credentials(),
        FailureClass::Timeout(message) => AuthError::timeout(message),
        FailureClass::RateLimited(message) => AuthError::rate_limited(message),
        FailureClass::Rejected(message) => AuthError::rejected(message),
        FailureClass::Transport(message) => AuthError::transport(message),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::Role;
    use rstest::rstest;

    #[test]
    fn identity_payload_is_identified() {
        let body = br#"{"identity":{"role":"teacher","displayName":"Teacher User"}}"#;
        assert_eq!(
            parse_authentication(body),
            Ok(Authentication::Identified(Identity::new(
                Role::Teacher,
                "Teacher User"
            )))
        );
    }

    #[rstest]
    #[case(b"".as_slice())]
    #[case(b"  \n".as_slice())]
    #[case(br#"{}"#.as_slice())]
    #[case(br#"{"identity":null}"#.as_slice())]
    fn missing_identity_is_anonymous(#[case] body: &[u8]) {
        assert_eq!(parse_authentication(body), Ok(Authentication::Anonymous));
    }

    #[test]
    fn malformed_payload_is_a_transport_failure() {
        let err = parse_authentication(b"<html>").expect_err("html is not json");
        assert!(matches!(err, AuthError::Transport { .. }));
    }

    #[test]
    fn unauthorized_maps_to_invalid_credentials() {
        assert_eq!(
            map_failure(FailureClass::Unauthorized("status 401".to_owned())),
            AuthError::InvalidCredentials
        );
    }
}
