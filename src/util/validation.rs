//! Field predicates for the login form.
//!
//! DESIGN
//! ======
//! Predicates are pure `&str -> bool` functions so they can be reused by the
//! state model, the controller and any host-side pre-checks. The password
//! rule is the only one a host may replace.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::fmt;
use std::rc::Rc;

/// Message shown when the email predicate rejects the current value.
pub const EMAIL_ERROR: &str = "Please enter a valid email address";
/// Message shown when the password field is empty.
pub const PASSWORD_REQUIRED_ERROR: &str = "Password is required";
/// Message shown when a host-supplied password rule rejects a non-empty value.
pub const PASSWORD_POLICY_ERROR: &str = "Password does not meet the requirements";

/// Host-supplied password rule.
pub type PasswordValidator = Rc<dyn Fn(&str) -> bool>;

/// Returns `true` for a conventional `local@domain.tld` address.
///
/// Rejects any whitespace (leading, trailing or embedded), more or fewer than
/// one `@`, an empty local part, and domains without at least two non-empty
/// dot-separated labels.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    let first_ok = labels.next().is_some_and(|label| !label.is_empty());
    let rest = labels.collect::<Vec<_>>();
    first_ok && !rest.is_empty() && rest.iter().all(|label| !label.is_empty())
}

/// Default password rule: presence only.
#[must_use]
pub fn is_present(password: &str) -> bool {
    !password.is_empty()
}

/// Password acceptance rule, either presence-only or a host validator.
#[derive(Clone, Default)]
pub struct PasswordPolicy {
    custom: Option<PasswordValidator>,
}

impl PasswordPolicy {
    /// Replace the presence check with `validator`.
    pub fn custom(validator: impl Fn(&str) -> bool + 'static) -> Self {
        Self {
            custom: Some(Rc::new(validator)),
        }
    }

    /// Require at least `min` characters.
    #[must_use]
    pub fn min_length(min: usize) -> Self {
        Self::custom(move |password| password.chars().count() >= min.max(1))
    }

    /// Whether the host replaced the default rule.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.custom.is_some()
    }

    #[must_use]
    pub fn accepts(&self, password: &str) -> bool {
        match &self.custom {
            Some(validator) => validator(password),
            None => is_present(password),
        }
    }

    /// Message for a rejected password, or an empty string when accepted.
    #[must_use]
    pub fn message_for(&self, password: &str) -> &'static str {
        if self.accepts(password) {
            ""
        } else if password.is_empty() {
            PASSWORD_REQUIRED_ERROR
        } else {
            PASSWORD_POLICY_ERROR
        }
    }
}

impl fmt::Debug for PasswordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordPolicy")
            .field("custom", &self.is_custom())
            .finish()
    }
}

/// Message for a rejected email, or an empty string when accepted.
#[must_use]
pub fn email_message_for(email: &str) -> &'static str {
    if is_valid_email(email) { "" } else { EMAIL_ERROR }
}
