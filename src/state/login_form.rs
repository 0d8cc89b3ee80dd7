//! Login form state model and its pure transitions.
//!
//! DESIGN
//! ======
//! The state is plain data (`Clone + Send + Sync`) so a component can mirror
//! it into a signal. Field validity is never stored independently of the
//! values: every transition that touches a value re-runs [`derive_validity`].
//! Messages are only refreshed for fields the user has blurred or after a
//! submit attempt, which is what decides when errors become visible.
//!
//! The async side of submission lives in `auth::controller`; here a submit is
//! split into [`LoginFormState::begin_submit`] and
//! [`LoginFormState::finish_submit`].

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use serde::{Deserialize, Serialize};

use crate::util::validation::{PasswordPolicy, email_message_for, is_valid_email};

/// One of the two validated inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Email, Field::Password];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// A value per validated field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap<T> {
    pub email: T,
    pub password: T,
}

impl<T> FieldMap<T> {
    pub fn get(&self, field: Field) -> &T {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut T {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }
}

impl FieldMap<bool> {
    /// Both entries are `true`.
    #[must_use]
    pub fn all(&self) -> bool {
        self.email && self.password
    }
}

/// Snapshot of the submitted values, passed to the login operation and
/// carried by the `login` event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginFormData {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Result of [`LoginFormState::begin_submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStart {
    /// Validation failed; nothing was started.
    Invalid,
    /// Another attempt is still outstanding.
    InFlight,
    /// `submitting` is now set; the snapshot must be handed to the login
    /// operation and [`LoginFormState::finish_submit`] called once it settles.
    Started(LoginFormData),
}

/// Full state of one mounted login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    email: String,
    password: String,
    remember_me: bool,
    validation_errors: FieldMap<String>,
    field_validity: FieldMap<bool>,
    touched: FieldMap<bool>,
    focused_field: Option<Field>,
    submit_attempted: bool,
    submitting: bool,
    external_error: String,
}

/// Validity of each field for the given values.
#[must_use]
pub fn derive_validity(state: &LoginFormState, policy: &PasswordPolicy) -> FieldMap<bool> {
    FieldMap {
        email: is_valid_email(&state.email),
        password: policy.accepts(&state.password),
    }
}

impl LoginFormState {
    /// Fresh state with the email seeded from `initial_email`.
    #[must_use]
    pub fn new(initial_email: &str, policy: &PasswordPolicy) -> Self {
        let mut state = Self {
            email: initial_email.to_owned(),
            ..Self::default()
        };
        state.field_validity = derive_validity(&state, policy);
        state
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn validation_errors(&self) -> &FieldMap<String> {
        &self.validation_errors
    }

    /// Message for `field`, empty when there is nothing to show.
    pub fn error(&self, field: Field) -> &str {
        self.validation_errors.get(field)
    }

    pub fn field_validity(&self) -> &FieldMap<bool> {
        &self.field_validity
    }

    pub fn is_valid(&self) -> bool {
        self.field_validity.all()
    }

    pub fn is_touched(&self, field: Field) -> bool {
        *self.touched.get(field)
    }

    pub fn focused_field(&self) -> Option<Field> {
        self.focused_field
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn external_error(&self) -> &str {
        &self.external_error
    }

    /// Current values as a login payload.
    #[must_use]
    pub fn snapshot(&self) -> LoginFormData {
        LoginFormData {
            email: self.email.clone(),
            password: self.password.clone(),
            remember_me: self.remember_me,
        }
    }

    /// Replace a field value and refresh its derived state.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>, policy: &PasswordPolicy) {
        *self.value_mut(field) = value.into();
        self.field_validity = derive_validity(self, policy);
        if self.shows_errors_for(field) || !self.error(field).is_empty() {
            self.refresh_message(field, policy);
        }
    }

    pub fn set_remember_me(&mut self, value: bool) {
        self.remember_me = value;
    }

    pub fn focus(&mut self, field: Field) {
        self.focused_field = Some(field);
    }

    /// Mark `field` touched; its message is visible from here on.
    pub fn blur(&mut self, field: Field, policy: &PasswordPolicy) {
        if self.focused_field == Some(field) {
            self.focused_field = None;
        }
        *self.touched.get_mut(field) = true;
        self.refresh_message(field, policy);
    }

    /// Run both predicates, write messages for every field, and return the
    /// overall result.
    pub fn validate(&mut self, policy: &PasswordPolicy) -> bool {
        self.field_validity = derive_validity(self, policy);
        for field in Field::ALL {
            self.refresh_message(field, policy);
        }
        self.field_validity.all()
    }

    /// First half of a submit: touch, validate, guard, then mark submitting.
    pub fn begin_submit(&mut self, policy: &PasswordPolicy) -> SubmitStart {
        self.touched = FieldMap {
            email: true,
            password: true,
        };
        self.submit_attempted = true;
        if !self.validate(policy) {
            return SubmitStart::Invalid;
        }
        if self.submitting {
            return SubmitStart::InFlight;
        }
        self.submitting = true;
        SubmitStart::Started(self.snapshot())
    }

    /// Second half of a submit, called once the login operation settles
    /// regardless of outcome. Field messages are left alone.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Host-side error channel. The controller itself never writes here.
    pub fn set_external_error(&mut self, message: impl Into<String>) {
        self.external_error = message.into();
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }

    fn shows_errors_for(&self, field: Field) -> bool {
        self.submit_attempted || self.is_touched(field)
    }

    fn refresh_message(&mut self, field: Field, policy: &PasswordPolicy) {
        let message = match field {
            Field::Email => email_message_for(&self.email),
            Field::Password => policy.message_for(&self.password),
        };
        *self.validation_errors.get_mut(field) = message.to_owned();
    }
}
