//! Adapters implementing the domain ports.
//!
//! - `directory` / `simulated`: fixed-latency stand-ins used when no
//!   endpoints are configured.
//! - `http`: reqwest adapters for real endpoints.
//! - `toast` / `navigation`: notification sink and redirect recorders.

mod directory;
pub mod http;
mod navigation;
mod simulated;
mod toast;

pub use directory::{DEFAULT_LOGIN_LATENCY, MockUserDirectory};
pub use navigation::NavigationHistory;
pub use simulated::{DEFAULT_CONTACT_LATENCY, SimulatedLeadCapture};
pub use toast::{ToastFeed, ToastQueue, TracingNotifier};
