//! Toast payloads pushed by the form controllers.

use serde::Serialize;

use super::identity::Identity;

/// Visual treatment of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral or positive outcome.
    #[default]
    Default,
    /// Failure the user should act on.
    Destructive,
}

/// A transient message for the notification sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Headline.
    pub title: String,
    /// Supporting line.
    pub description: String,
    /// Visual treatment.
    pub severity: Severity,
}

impl Notification {
    /// Neutral toast.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    /// Destructive toast.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    /// Greeting for a recognised user.
    ///
    /// # Examples
    /// ```
    /// use landing::domain::{Identity, Notification, Role};
    ///
    /// let toast = Notification::welcome(&Identity::new(Role::Admin, "Admin User"));
    /// assert_eq!(toast.title, "Welcome, Admin User!");
    /// assert_eq!(toast.description, "Redirecting to admin dashboard...");
    /// ```
    pub fn welcome(identity: &Identity) -> Self {
        Self::info(
            format!("Welcome, {}!", identity.display_name),
            format!("Redirecting to {} dashboard...", identity.role),
        )
    }

    /// Success without a directory match.
    pub fn login_accepted() -> Self {
        Self::info("Login Successful", "Redirecting to your dashboard...")
    }

    /// Generic login failure.
    pub fn login_failed() -> Self {
        Self::destructive(
            "Login Failed",
            "Invalid email or password. Please try again.",
        )
    }

    /// Demo request accepted.
    pub fn request_submitted() -> Self {
        Self::info(
            "Request Submitted!",
            "Our team will contact you within 24 hours.",
        )
    }

    /// Generic contact failure.
    pub fn request_failed() -> Self {
        Self::destructive("Something went wrong", "Please try again later.")
    }
}
