//! Builders that pick adapters for each port from [`LandingSettings`].
//!
//! A configured endpoint selects the HTTP adapter; otherwise the simulated
//! adapter with the configured latency is used.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::config::{LandingSettings, SettingsError};
use crate::domain::ports::{Authenticator, LeadCapture, Navigator, Notifier, TokioSleeper};
use crate::domain::{ContactController, LoginController, LoginFlowPorts};
use crate::outbound::http::{HttpAuthenticator, HttpLeadCapture, build_client};
use crate::outbound::{MockUserDirectory, SimulatedLeadCapture};
use crate::site::SiteConfig;

/// Failures while assembling the flows.
#[derive(Debug, Error)]
pub enum WiringError {
    /// Settings could not be interpreted.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Authenticator selected by the settings.
///
/// # Errors
///
/// Returns [`WiringError`] when the endpoint is malformed or the HTTP client
/// cannot be built.
pub fn build_authenticator(
    settings: &LandingSettings,
) -> Result<Arc<dyn Authenticator>, WiringError> {
    match settings.auth_endpoint()? {
        Some(endpoint) => {
            info!(%endpoint, "using HTTP authenticator");
            let client = build_client(settings.request_timeout())?;
            Ok(Arc::new(HttpAuthenticator::new(client, endpoint)))
        }
        None => {
            info!("using demo user directory");
            Ok(Arc::new(
                MockUserDirectory::demo().with_latency(settings.login_delay()),
            ))
        }
    }
}

/// Lead capture selected by the settings.
///
/// # Errors
///
/// Returns [`WiringError`] when the endpoint is malformed or the HTTP client
/// cannot be built.
pub fn build_lead_capture(
    settings: &LandingSettings,
) -> Result<Arc<dyn LeadCapture>, WiringError> {
    match settings.lead_endpoint()? {
        Some(endpoint) => {
            info!(%endpoint, "using HTTP lead capture");
            let client = build_client(settings.request_timeout())?;
            Ok(Arc::new(HttpLeadCapture::new(client, endpoint)))
        }
        None => {
            info!("using simulated lead capture");
            Ok(Arc::new(
                SimulatedLeadCapture::default().with_latency(settings.contact_delay()),
            ))
        }
    }
}

/// Login controller wired from settings and the site route table.
///
/// # Errors
///
/// See [`build_authenticator`].
pub fn build_login_controller(
    settings: &LandingSettings,
    site: &SiteConfig,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
) -> Result<LoginController, WiringError> {
    let controller = LoginController::new(LoginFlowPorts {
        authenticator: build_authenticator(settings)?,
        notifier,
        navigator,
        sleeper: Arc::new(TokioSleeper),
    })
    .with_routes(site.dashboards.clone())
    .with_redirect_delay(settings.redirect_delay());
    Ok(controller)
}

/// Contact controller wired from settings.
///
/// # Errors
///
/// See [`build_lead_capture`].
pub fn build_contact_controller(
    settings: &LandingSettings,
    notifier: Arc<dyn Notifier>,
) -> Result<ContactController, WiringError> {
    Ok(ContactController::new(build_lead_capture(settings)?, notifier))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{LoginForm, SubmitOutcome};
    use crate::outbound::{NavigationHistory, ToastQueue};

    fn settings() -> LandingSettings {
        LandingSettings {
            login_delay_ms: 5,
            contact_delay_ms: 5,
            redirect_delay_ms: 5,
            auth_endpoint: None,
            lead_endpoint: None,
            request_timeout_secs: 10,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_login_redirects_to_the_site_dashboard() {
        let (queue, mut feed) = ToastQueue::channel();
        let history = Arc::new(NavigationHistory::default());
        let controller = build_login_controller(
            &settings(),
            &SiteConfig::default(),
            Arc::new(queue),
            history.clone(),
        )
        .expect("simulated wiring");

        let outcome = controller
            .submit(&LoginForm::new("accountant@school.com", "ledger1"))
            .await;

        assert!(outcome.is_completed());
        assert_eq!(
            history.current().map(|path| path.to_string()),
            Some("/app/finance/dashboard".to_owned())
        );
        let toasts = feed.drain();
        assert_eq!(toasts.len(), 1);
        assert!(matches!(outcome, SubmitOutcome::Completed(_)));
    }

    #[test]
    fn malformed_lead_endpoint_fails_wiring() {
        let mut settings = settings();
        settings.lead_endpoint = Some("::".to_owned());
        let (queue, _feed) = ToastQueue::channel();
        let result = build_contact_controller(&settings, Arc::new(queue));
        assert!(matches!(result, Err(WiringError::Settings(_))));
    }

    #[test]
    fn configured_endpoint_selects_http_adapter() {
        let mut settings = settings();
        settings.auth_endpoint = Some("https://auth.example.com/login".to_owned());
        assert!(build_authenticator(&settings).is_ok());
    }
}
