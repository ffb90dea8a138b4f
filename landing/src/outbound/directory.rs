//! In-memory user directory standing in for a real identity provider.
//!
//! Any credentials are accepted. Emails found in the table (compared
//! case-insensitively) are reported as [`Authentication::Identified`]; all
//! others as [`Authentication::Anonymous`]. Each call waits a fixed simulated
//! round trip first.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{AuthError, Authenticator, Sleeper, TokioSleeper};
use crate::domain::{Authentication, Identity, LoginCredentials, Role};

/// Simulated network round trip for login calls.
pub const DEFAULT_LOGIN_LATENCY: Duration = Duration::from_millis(1000);

const DEMO_USERS: [(&str, Role, &str); 5] = [
    ("admin@school.com", Role::Admin, "Admin User"),
    ("counselor@school.com", Role::Counselor, "Counselor User"),
    ("teacher@school.com", Role::Teacher, "Teacher User"),
    ("accountant@school.com", Role::Accountant, "Accountant User"),
    ("student@school.com", Role::Student, "Student User"),
];

/// Fixture authenticator backed by the demo account table.
pub struct MockUserDirectory {
    entries: HashMap<String, Identity>,
    latency: Duration,
    sleeper: Arc<dyn Sleeper>,
}

impl MockUserDirectory {
    /// Directory holding the five demo accounts.
    ///
    /// # Examples
    /// ```
    /// use landing::domain::Role;
    /// use landing::outbound::MockUserDirectory;
    ///
    /// let directory = MockUserDirectory::demo();
    /// let identity = directory.lookup("Admin@School.com").expect("demo admin");
    /// assert_eq!(identity.role, Role::Admin);
    /// assert!(directory.lookup("unknown@x.com").is_none());
    /// ```
    pub fn demo() -> Self {
        let entries = DEMO_USERS
            .into_iter()
            .map(|(email, role, name)| (email.to_owned(), Identity::new(role, name)))
            .collect();
        Self {
            entries,
            latency: DEFAULT_LOGIN_LATENCY,
            sleeper: Arc::new(TokioSleeper),
        }
    }

    /// Override the simulated round trip.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Override how the round trip is waited out.
    #[must_use]
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Entry for `email`, compared case-insensitively.
    pub fn lookup(&self, email: &str) -> Option<&Identity> {
        self.entries.get(&email.to_lowercase())
    }
}

#[async_trait]
impl Authenticator for MockUserDirectory {
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Authentication, AuthError> {
        self.sleeper.sleep(self.latency).await;
        let outcome = match self.entries.get(&credentials.lookup_key()) {
            Some(identity) => Authentication::Identified(identity.clone()),
            None => Authentication::Anonymous,
        };
        debug!(
            recognised = matches!(outcome, Authentication::Identified(_)),
            "directory lookup finished"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::LoginForm;
    use rstest::rstest;

    fn credentials(email: &str) -> LoginCredentials {
        LoginCredentials::try_from_form(&LoginForm::new(email, "anything"))
            .expect("credentials shape")
    }

    #[rstest]
    #[case("admin@school.com", Role::Admin, "Admin User")]
    #[case("COUNSELOR@school.com", Role::Counselor, "Counselor User")]
    #[case("Teacher@School.Com", Role::Teacher, "Teacher User")]
    #[case("accountant@school.com", Role::Accountant, "Accountant User")]
    #[case("student@school.com", Role::Student, "Student User")]
    #[tokio::test(start_paused = true)]
    async fn demo_accounts_are_identified(
        #[case] email: &str,
        #[case] role: Role,
        #[case] name: &str,
    ) {
        let directory = MockUserDirectory::demo();
        let outcome = directory
            .authenticate(&credentials(email))
            .await
            .expect("mock directory never fails");
        assert_eq!(outcome, Authentication::Identified(Identity::new(role, name)));
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_emails_are_accepted_anonymously() {
        let directory = MockUserDirectory::demo();
        let outcome = directory
            .authenticate(&credentials("unknown@x.com"))
            .await
            .expect("mock directory never fails");
        assert_eq!(outcome, Authentication::Anonymous);
    }

    #[tokio::test(start_paused = true)]
    async fn lookup_waits_for_the_simulated_round_trip() {
        let directory = MockUserDirectory::demo().with_latency(Duration::from_millis(250));
        let start = tokio::time::Instant::now();
        directory
            .authenticate(&credentials("admin@school.com"))
            .await
            .expect("mock directory never fails");
        assert!(start.elapsed() >= Duration::from_millis(250));
    }
}
