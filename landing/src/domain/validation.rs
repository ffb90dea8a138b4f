//! Field-level validation shared by the login and contact forms.
//!
//! Rules report one message per field: the first rule that fails wins, and
//! later rules for the same field are not consulted. Lengths are counted in
//! Unicode scalar values and inputs are never trimmed.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Name of a form field, as rendered next to its inline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    /// Full name on the contact form.
    Name,
    /// Organisation on the contact form.
    Organization,
    /// Email on either form.
    Email,
    /// Phone number on the contact form.
    Phone,
    /// Password on the login form.
    Password,
    /// Free-text message on the contact form.
    Message,
}

impl FieldName {
    /// Identifier used by the form markup.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Organization => "organization",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages. Empty means the input is valid.
///
/// # Examples
/// ```
/// use landing::domain::{FieldErrors, FieldName};
///
/// let mut errors = FieldErrors::default();
/// assert!(errors.is_empty());
/// errors.reject(FieldName::Phone, "Please enter a valid phone number");
/// assert_eq!(errors.get(FieldName::Phone), Some("Please enter a valid phone number"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
    /// Record `message` for `field` unless the field already failed.
    pub fn reject(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Merge the outcome of a single-field check.
    pub fn check(&mut self, field: FieldName, outcome: Result<(), String>) {
        if let Err(message) = outcome {
            self.reject(field, message);
        }
    }

    /// Message recorded for `field`, if any.
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether every field passed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing fields and their messages in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// `Ok(())` when empty, otherwise the errors themselves.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Inclusive length bounds with the messages shown when violated.
///
/// Length is measured in UTF-16 code units, the unit browsers report for
/// form input, so a character outside the Basic Multilingual Plane counts as
/// two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRule {
    /// Minimum length in UTF-16 code units.
    pub min: usize,
    /// Maximum length in UTF-16 code units.
    pub max: usize,
    /// Message when the input is shorter than `min`.
    pub too_short: &'static str,
    /// Message when the input is longer than `max`.
    pub too_long: &'static str,
}

impl LengthRule {
    /// Check `value` against the bounds.
    pub fn check(&self, value: &str) -> Result<(), String> {
        let length = value.encode_utf16().count();
        if length < self.min {
            return Err(self.too_short.to_owned());
        }
        if length > self.max {
            return Err(self.too_long.to_owned());
        }
        Ok(())
    }
}

/// Message shown when an email fails the address check.
pub const INVALID_EMAIL: &str = "Please enter a valid email";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Leading dots and doubled dots are rejected separately; the regex
        // engine has no lookaround. Classes are spelled out in ASCII so no
        // Unicode case folding widens them.
        let pattern =
            r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Whether `value` has the `local@domain.tld` shape accepted by the forms.
///
/// # Examples
/// ```
/// use landing::domain::is_valid_email;
///
/// assert!(is_valid_email("admin@school.com"));
/// assert!(!is_valid_email("admin@school"));
/// assert!(!is_valid_email(".admin@school.com"));
/// ```
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && email_regex().is_match(value)
}

/// Email check in the shape expected by [`FieldErrors::check`].
pub fn check_email(value: &str) -> Result<(), String> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(INVALID_EMAIL.to_owned())
    }
}
