//! Ports at the edge of the form flows.
//!
//! Controllers depend on these traits only. Adapters in
//! [`crate::outbound`] implement them; tests substitute mocks.

mod macros;
pub(crate) use macros::define_port_error;

mod authenticator;
mod lead_capture;
mod navigator;
mod notifier;
mod sleeper;

#[cfg(test)]
pub use authenticator::MockAuthenticator;
pub use authenticator::{AuthError, Authenticator};
#[cfg(test)]
pub use lead_capture::MockLeadCapture;
pub use lead_capture::{LeadCapture, LeadCaptureError};
#[cfg(test)]
pub use navigator::MockNavigator;
pub use navigator::Navigator;
#[cfg(test)]
pub use notifier::MockNotifier;
pub use notifier::Notifier;
pub use sleeper::{Sleeper, TokioSleeper};
