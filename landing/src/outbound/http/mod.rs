//! HTTP adapters for the authentication and lead-capture ports.
//!
//! These replace the simulated round trips when endpoints are configured.
//! They own transport details only: JSON encoding, timeouts, and mapping
//! HTTP failures onto the port error taxonomy.

mod auth;
mod lead;
mod status;

pub use auth::HttpAuthenticator;
pub use lead::HttpLeadCapture;

use std::time::Duration;

use reqwest::Client;

const DEFAULT_USER_AGENT: &str = "class-landing/0.1";

/// Build the shared reqwest client used by both adapters.
///
/// # Errors
///
/// Returns an error when the reqwest client cannot be constructed.
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .build()
}
