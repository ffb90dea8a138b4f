//! Login modal submission controller.
//!
//! Validates the form, authenticates through the injected [`Authenticator`],
//! pushes the resulting toast, and for recognised users redirects to the
//! role dashboard after a short pause. A successful login closes the modal
//! before that pause, so nothing more can be submitted while the redirect is
//! pending; a failed or rejected one leaves it open for a retry.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, info, warn};

use super::ports::{AuthError, Authenticator, Navigator, Notifier, Sleeper};
use super::{
    Authentication, DashboardPath, DashboardRoutes, Identity, LoginCredentials, LoginForm,
    Notification, SubmissionGate, SubmissionPhase, SubmitOutcome,
};

/// Pause between the welcome toast and the dashboard redirect.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// What a successful login produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    /// Directory match, if the email was recognised.
    pub identity: Option<Identity>,
    /// Dashboard the browser was sent to.
    pub redirect: Option<DashboardPath>,
}

/// Outcome of [`LoginController::submit`].
pub type LoginOutcome = SubmitOutcome<LoginSuccess, AuthError>;

/// Port bundle required by the login controller.
pub struct LoginFlowPorts {
    /// Identity capability.
    pub authenticator: Arc<dyn Authenticator>,
    /// Toast sink.
    pub notifier: Arc<dyn Notifier>,
    /// Redirect capability.
    pub navigator: Arc<dyn Navigator>,
    /// Suspension used for the redirect pause.
    pub sleeper: Arc<dyn Sleeper>,
}

#[derive(Debug)]
struct LoginView {
    open: bool,
}

/// Drives one login modal.
pub struct LoginController {
    authenticator: Arc<dyn Authenticator>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    sleeper: Arc<dyn Sleeper>,
    routes: DashboardRoutes,
    redirect_delay: Duration,
    gate: SubmissionGate,
    view: Mutex<LoginView>,
}

impl LoginController {
    /// Build a controller for an open modal with the default routes and
    /// redirect pause.
    pub fn new(ports: LoginFlowPorts) -> Self {
        let LoginFlowPorts {
            authenticator,
            notifier,
            navigator,
            sleeper,
        } = ports;
        Self {
            authenticator,
            notifier,
            navigator,
            sleeper,
            routes: DashboardRoutes::default(),
            redirect_delay: DEFAULT_REDIRECT_DELAY,
            gate: SubmissionGate::new(),
            view: Mutex::new(LoginView { open: true }),
        }
    }

    /// Override the role to dashboard mapping.
    #[must_use]
    pub fn with_routes(mut self, routes: DashboardRoutes) -> Self {
        self.routes = routes;
        self
    }

    /// Override the pause before redirecting.
    #[must_use]
    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    /// Current submission phase.
    pub fn phase(&self) -> SubmissionPhase {
        self.gate.phase()
    }

    /// Whether the modal is showing.
    pub fn is_open(&self) -> bool {
        self.view().open
    }

    /// Show the modal again after a successful login closed it.
    pub fn open(&self) {
        self.view().open = true;
    }

    /// Submit the login form.
    ///
    /// Invalid input returns [`SubmitOutcome::Invalid`] without touching any
    /// port. A call made while another is in flight returns
    /// [`SubmitOutcome::Busy`], and one made while the modal is closed returns
    /// [`SubmitOutcome::Closed`]; neither has any other effect.
    pub async fn submit(&self, form: &LoginForm) -> LoginOutcome {
        if !self.gate.phase().accepts_submissions() {
            debug!("login submit ignored while in flight");
            return SubmitOutcome::Busy;
        }
        if !self.is_open() {
            debug!("login submit ignored while modal closed");
            return SubmitOutcome::Closed;
        }

        let credentials = match LoginCredentials::try_from_form(form) {
            Ok(credentials) => credentials,
            Err(errors) => {
                debug!(failing = errors.len(), "login form rejected");
                return SubmitOutcome::Invalid(errors);
            }
        };

        let Some(ticket) = self.gate.try_begin() else {
            debug!("login submit ignored while in flight");
            return SubmitOutcome::Busy;
        };
        debug!("login submitting");

        match self.authenticator.authenticate(&credentials).await {
            Ok(Authentication::Identified(identity)) => {
                let path = self.routes.path_for(identity.role);
                self.notifier.notify(Notification::welcome(&identity));
                self.view().open = false;
                ticket.succeed();
                info!(role = %identity.role, redirect = %path, "login recognised");

                self.sleeper.sleep(self.redirect_delay).await;
                self.navigator.redirect(&path);
                SubmitOutcome::Completed(LoginSuccess {
                    identity: Some(identity),
                    redirect: Some(path),
                })
            }
            Ok(Authentication::Anonymous) => {
                self.notifier.notify(Notification::login_accepted());
                self.view().open = false;
                ticket.succeed();
                info!("login accepted without directory match");
                SubmitOutcome::Completed(LoginSuccess {
                    identity: None,
                    redirect: None,
                })
            }
            Err(error) => {
                warn!(%error, "login failed");
                self.notifier.notify(Notification::login_failed());
                ticket.fail();
                SubmitOutcome::Failed(error)
            }
        }
    }

    fn view(&self) -> MutexGuard<'_, LoginView> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
