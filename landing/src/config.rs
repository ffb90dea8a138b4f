//! Runtime settings loaded via OrthoConfig.
//!
//! Delays and the request timeout default to the latencies the landing page
//! has always simulated. Setting an endpoint switches the matching flow from
//! its simulated adapter to the HTTP adapter.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// An endpoint value is not an absolute URL.
    #[error("{field} is not a valid URL ('{value}'): {message}")]
    InvalidEndpoint {
        /// Setting name.
        field: &'static str,
        /// Raw configured value.
        value: String,
        /// Parser message.
        message: String,
    },
}

/// Settings for the form flows.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LANDING")]
pub struct LandingSettings {
    /// Simulated login round trip in milliseconds.
    #[ortho_config(default = 1000)]
    pub login_delay_ms: u64,
    /// Simulated demo-request round trip in milliseconds.
    #[ortho_config(default = 1000)]
    pub contact_delay_ms: u64,
    /// Pause between the welcome toast and the redirect, in milliseconds.
    #[ortho_config(default = 1500)]
    pub redirect_delay_ms: u64,
    /// Authentication endpoint; enables the HTTP authenticator.
    pub auth_endpoint: Option<String>,
    /// Lead endpoint; enables the HTTP lead capture.
    pub lead_endpoint: Option<String>,
    /// HTTP request timeout in seconds.
    #[ortho_config(default = 10)]
    pub request_timeout_secs: u64,
}

impl LandingSettings {
    /// Simulated login latency.
    pub const fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    /// Simulated demo-request latency.
    pub const fn contact_delay(&self) -> Duration {
        Duration::from_millis(self.contact_delay_ms)
    }

    /// Pause before redirecting a recognised user.
    pub const fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    /// HTTP request timeout.
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parsed authentication endpoint, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidEndpoint`] when the value is not a URL.
    pub fn auth_endpoint(&self) -> Result<Option<Url>, SettingsError> {
        parse_endpoint("auth_endpoint", self.auth_endpoint.as_deref())
    }

    /// Parsed lead endpoint, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidEndpoint`] when the value is not a URL.
    pub fn lead_endpoint(&self) -> Result<Option<Url>, SettingsError> {
        parse_endpoint("lead_endpoint", self.lead_endpoint.as_deref())
    }
}

fn parse_endpoint(field: &'static str, raw: Option<&str>) -> Result<Option<Url>, SettingsError> {
    raw.map(|value| {
        Url::parse(value).map_err(|error| SettingsError::InvalidEndpoint {
            field,
            value: value.to_owned(),
            message: error.to_string(),
        })
    })
    .transpose()
}
