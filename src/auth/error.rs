//! Error and response contracts for the injected login operation.
//!
//! ERROR HANDLING
//! ==============
//! A login operation reports failure with [`LoginError`]. The controller only
//! logs it and clears `submitting`; showing it to the user is the host's job
//! through the form's `error` prop.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Well-known failure codes an auth backend may report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoginErrorCode {
    InvalidCredentials,
    AccountLocked,
    AccountDisabled,
    EmailNotVerified,
    NetworkError,
    ServerError,
    #[default]
    UnknownError,
}

impl LoginErrorCode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::AccountLocked => "ACCOUNT_LOCKED",
            Self::AccountDisabled => "ACCOUNT_DISABLED",
            Self::EmailNotVerified => "EMAIL_NOT_VERIFIED",
            Self::NetworkError => "NETWORK_ERROR",
            Self::ServerError => "SERVER_ERROR",
            Self::UnknownError => "UNKNOWN_ERROR",
        }
    }

    /// Parse a wire code, mapping anything unrecognized to `UnknownError`.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "INVALID_CREDENTIALS" => Self::InvalidCredentials,
            "ACCOUNT_LOCKED" => Self::AccountLocked,
            "ACCOUNT_DISABLED" => Self::AccountDisabled,
            "EMAIL_NOT_VERIFIED" => Self::EmailNotVerified,
            "NETWORK_ERROR" => Self::NetworkError,
            "SERVER_ERROR" => Self::ServerError,
            _ => Self::UnknownError,
        }
    }

    /// User-facing text used when the backend sends no message.
    #[must_use]
    pub fn default_message(self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Invalid email or password",
            Self::AccountLocked => "This account is locked",
            Self::AccountDisabled => "This account has been disabled",
            Self::EmailNotVerified => "Please verify your email address before signing in",
            Self::NetworkError => "Unable to reach the server",
            Self::ServerError => "The server encountered an error",
            Self::UnknownError => "Sign in failed",
        }
    }
}

/// Failure reported by a login operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct LoginError {
    pub code: LoginErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
}

impl LoginError {
    pub fn new(code: LoginErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: BTreeMap::new(),
        }
    }

    /// Error carrying the code's default message.
    #[must_use]
    pub fn from_code(code: LoginErrorCode) -> Self {
        Self::new(code, code.default_message())
    }

    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// User record returned on successful sign-in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// Response shape of a typical auth endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<LoginUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Convert an unsuccessful response into a [`LoginError`].
    ///
    /// # Errors
    ///
    /// Returns a [`LoginError`] when `success` is false. The code is parsed
    /// from `error` and the message prefers `message`, then the code default.
    pub fn into_result(self) -> Result<Self, LoginError> {
        if self.success {
            return Ok(self);
        }
        let code = self
            .error
            .as_deref()
            .map_or(LoginErrorCode::UnknownError, LoginErrorCode::from_code);
        let message = self
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| code.default_message().to_owned());
        Err(LoginError::new(code, message))
    }
}
