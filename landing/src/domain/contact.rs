//! Demo-request form input and the validated request sent to lead capture.

use serde::{Deserialize, Serialize};

use super::validation::{FieldErrors, FieldName, LengthRule, check_email};

/// Bounds for the full name field.
pub const NAME_RULE: LengthRule = LengthRule {
    min: 2,
    max: 100,
    too_short: "Name must be at least 2 characters",
    too_long: "Name must be at most 100 characters",
};

/// Bounds for the organisation field.
pub const ORGANIZATION_RULE: LengthRule = LengthRule {
    min: 2,
    max: 200,
    too_short: "Organization name is required",
    too_long: "Organization name must be at most 200 characters",
};

/// Bounds for the phone field.
pub const PHONE_RULE: LengthRule = LengthRule {
    min: 10,
    max: 15,
    too_short: "Please enter a valid phone number",
    too_long: "Please enter a valid phone number",
};

/// Bounds for the message field.
pub const MESSAGE_RULE: LengthRule = LengthRule {
    min: 10,
    max: 1000,
    too_short: "Message must be at least 10 characters",
    too_long: "Message must be at most 1000 characters",
};

/// Raw values typed into the "Request a Demo" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    /// Full name.
    pub name: String,
    /// School or institute name.
    pub organization: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Free-text estimate such as "500 students, 50 staff".
    pub expected_users: Option<String>,
    /// Requirements message.
    pub message: String,
}

impl ContactForm {
    /// Check every field and collect inline messages.
    ///
    /// # Examples
    /// ```
    /// use landing::domain::{ContactForm, FieldName};
    ///
    /// let form = ContactForm {
    ///     name: "Asha Rao".into(),
    ///     organization: String::new(),
    ///     email: "asha@school.com".into(),
    ///     phone: "+919876543210".into(),
    ///     expected_users: None,
    ///     message: "We run three campuses.".into(),
    /// };
    /// let errors = form.validate();
    /// assert_eq!(errors.len(), 1);
    /// assert_eq!(
    ///     errors.get(FieldName::Organization),
    ///     Some("Organization name is required"),
    /// );
    /// ```
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.check(FieldName::Name, NAME_RULE.check(&self.name));
        errors.check(
            FieldName::Organization,
            ORGANIZATION_RULE.check(&self.organization),
        );
        errors.check(FieldName::Email, check_email(&self.email));
        errors.check(FieldName::Phone, PHONE_RULE.check(&self.phone));
        errors.check(FieldName::Message, MESSAGE_RULE.check(&self.message));
        errors
    }

    /// Whether every field is blank, as after a successful submit.
    pub fn is_cleared(&self) -> bool {
        self == &Self::default()
    }
}

/// A demo request whose fields all satisfy the form bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    name: String,
    organization: String,
    email: String,
    phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected_users: Option<String>,
    message: String,
}

impl ContactRequest {
    /// Validate a submitted form.
    pub fn try_from_form(form: &ContactForm) -> Result<Self, FieldErrors> {
        form.validate().into_result()?;
        Ok(Self {
            name: form.name.clone(),
            organization: form.organization.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            expected_users: form
                .expected_users
                .clone()
                .filter(|value| !value.is_empty()),
            message: form.message.clone(),
        })
    }

    /// Full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Organisation name.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Contact phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Expected user count, when given.
    pub fn expected_users(&self) -> Option<&str> {
        self.expected_users.as_deref()
    }

    /// Requirements message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
