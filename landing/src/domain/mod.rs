//! Form schemas, validation, and submission controllers.
//!
//! Purpose: hold the transport-agnostic core of the landing page forms.
//! Nothing here knows about browsers, HTTP, or toast rendering; those arrive
//! through [`ports`].
//!
//! Public surface:
//! - `LoginForm` / `LoginCredentials` and `ContactForm` / `ContactRequest`:
//!   raw and validated form values.
//! - `FieldErrors`: inline validation messages keyed by `FieldName`.
//! - `LoginController` and `ContactController`: the two submission flows.
//! - `SubmissionGate`: single-flight guard shared by both controllers.

mod contact;
mod contact_flow;
mod identity;
mod login;
mod login_flow;
mod notification;
pub mod ports;
mod submission;
mod validation;

pub use self::contact::{
    ContactForm, ContactRequest, MESSAGE_RULE, NAME_RULE, ORGANIZATION_RULE, PHONE_RULE,
};
pub use self::contact_flow::{ContactController, ContactOutcome};
pub use self::identity::{Authentication, DashboardPath, DashboardRoutes, Identity, Role};
pub use self::login::{LoginCredentials, LoginForm, PASSWORD_MIN};
pub use self::login_flow::{
    DEFAULT_REDIRECT_DELAY, LoginController, LoginFlowPorts, LoginOutcome, LoginSuccess,
};
pub use self::notification::{Notification, Severity};
pub use self::submission::{SubmissionGate, SubmissionPhase, SubmissionTicket, SubmitOutcome};
pub use self::validation::{
    FieldErrors, FieldName, INVALID_EMAIL, LengthRule, check_email, is_valid_email,
};
