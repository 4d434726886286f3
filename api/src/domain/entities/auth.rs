//! Identity provider types
//!
//! Accounts and sessions as reported by the external auth service.
//! Passed through to clients, never persisted here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Minimum password length accepted by the identity provider
pub const MIN_PASSWORD_LEN: usize = 6;

/// An account known to the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub email_confirmed_at: Option<DateTime<Utc>>,
}

/// A logged-in session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: AuthUser,
}

/// Result of a signup: a session is only issued when email confirmation is off
#[derive(Debug, Clone, Serialize)]
pub struct SignUpOutcome {
    pub user: AuthUser,
    pub session: Option<AuthSession>,
}

/// Email and password pair
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Reject input the provider would refuse anyway
    pub fn validate(&self) -> Result<(), DomainError> {
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::InvalidArgument(
                "A valid email is required".to_string(),
            ));
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(DomainError::InvalidArgument(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        Ok(())
    }
}

/// Signup request
#[derive(Debug, Clone, Deserialize)]
pub struct SignUp {
    #[serde(flatten)]
    pub credentials: Credentials,
    /// Where the confirmation email should send the user
    #[serde(default)]
    pub redirect_url: Option<String>,
}
