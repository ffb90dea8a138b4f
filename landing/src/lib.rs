//! Login and demo-request form flows for the Class Management System
//! landing page.
//!
//! The crate is split the hexagonal way:
//!
//! - [`domain`]: form schemas, validation, the single-flight submission
//!   gate, and the login/contact controllers. Controllers only see ports.
//! - [`outbound`]: adapters for those ports, from the demo user directory
//!   and simulated lead capture to reqwest-backed HTTP clients.
//! - [`config`] and [`wiring`]: settings and the builders that choose
//!   adapters from them.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use landing::domain::{ContactController, ContactForm};
//! use landing::outbound::{SimulatedLeadCapture, ToastQueue};
//!
//! # async fn demo() {
//! let (toasts, mut feed) = ToastQueue::channel();
//! let controller = ContactController::new(
//!     Arc::new(SimulatedLeadCapture::default().with_latency(Duration::ZERO)),
//!     Arc::new(toasts),
//! );
//! let outcome = controller.submit(ContactForm::default()).await;
//! assert!(outcome.field_errors().is_some());
//! assert!(feed.drain().is_empty());
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod outbound;
pub mod site;
pub mod wiring;

pub use config::{LandingSettings, SettingsError};
pub use site::SiteConfig;
