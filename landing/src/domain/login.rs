//! Login form input and validated credentials.
//!
//! Keep raw form parsing outside the controller by exposing a constructor
//! that validates the submitted strings before any port is called.

use serde::Deserialize;
use zeroize::Zeroizing;

use super::validation::{FieldErrors, FieldName, LengthRule, check_email};

/// Minimum password length accepted by the login form.
pub const PASSWORD_MIN: usize = 6;

const PASSWORD_RULE: LengthRule = LengthRule {
    min: PASSWORD_MIN,
    max: usize::MAX,
    too_short: "Password must be at least 6 characters",
    too_long: "",
};

/// Raw values typed into the login modal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    /// Email field.
    pub email: String,
    /// Password field.
    pub password: String,
}

impl LoginForm {
    /// Build a form from borrowed field values.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check every field and collect inline messages.
    ///
    /// # Examples
    /// ```
    /// use landing::domain::{FieldName, LoginForm};
    ///
    /// let errors = LoginForm::new("admin@school.com", "abc").validate();
    /// assert_eq!(
    ///     errors.get(FieldName::Password),
    ///     Some("Password must be at least 6 characters"),
    /// );
    /// ```
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.check(FieldName::Email, check_email(&self.email));
        errors.check(FieldName::Password, PASSWORD_RULE.check(&self.password));
        errors
    }
}

/// Validated login credentials handed to an authenticator.
///
/// ## Invariants
/// - `email` has the address shape checked by [`LoginForm::validate`].
/// - `password` has at least [`PASSWORD_MIN`] characters and is wiped from
///   memory when dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Validate a submitted form.
    pub fn try_from_form(form: &LoginForm) -> Result<Self, FieldErrors> {
        form.validate().into_result()?;
        Ok(Self {
            email: form.email.clone(),
            password: Zeroizing::new(form.password.clone()),
        })
    }

    /// Email as typed.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Lowercased email used for directory lookups.
    pub fn lookup_key(&self) -> String {
        self.email.to_lowercase()
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
