//! Host-facing configuration for the login form.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::util::validation::PasswordPolicy;

/// Options a host page passes to the login form.
///
/// Every field is optional on the wire; missing keys take the defaults
/// below. The password policy is code-only and never (de)serialized.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginFormConfig {
    /// Disables inputs and the submit button while the host is busy.
    pub loading: bool,
    /// Form-level error rendered above the fields.
    pub error: String,
    /// Seeds the email field at mount.
    pub initial_email: String,
    pub show_remember_me: bool,
    /// Forgot-password and sign-up links.
    pub show_links: bool,
    #[serde(skip)]
    pub password_policy: PasswordPolicy,
}

impl Default for LoginFormConfig {
    fn default() -> Self {
        Self {
            loading: false,
            error: String::new(),
            initial_email: String::new(),
            show_remember_me: true,
            show_links: true,
            password_policy: PasswordPolicy::default(),
        }
    }
}

impl LoginFormConfig {
    /// Parse host options from JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn with_initial_email(mut self, email: impl Into<String>) -> Self {
        self.initial_email = email.into();
        self
    }

    #[must_use]
    pub fn with_password_policy(mut self, policy: PasswordPolicy) -> Self {
        self.password_policy = policy;
        self
    }
}
