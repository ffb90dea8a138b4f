//! Driving port for the login form's authentication call.
//!
//! The login controller talks to this trait only. The mock user directory,
//! the HTTP adapter, and test doubles all plug in here, so the controller
//! never learns where identities come from.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Authentication, LoginCredentials};

define_port_error! {
    /// Errors surfaced while authenticating login credentials.
    pub enum AuthError {
        /// The identity provider refused the email/password pair.
        InvalidCredentials => "invalid email or password",
        /// The call did not complete in time.
        Timeout { message: String } => "authentication timed out: {message}",
        /// The identity provider asked the caller to slow down.
        RateLimited { message: String } => "authentication rate limited: {message}",
        /// The identity provider rejected the request shape.
        Rejected { message: String } => "authentication request rejected: {message}",
        /// Network or server fault.
        Transport { message: String } => "authentication transport failed: {message}",
    }
}

/// Capability that turns validated credentials into an [`Authentication`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Authenticate the credentials.
    ///
    /// Implementations may suspend for a network round trip.
    async fn authenticate(&self, credentials: &LoginCredentials)
    -> Result<Authentication, AuthError>;
}
