//! Identity provider port trait
//!
//! Signup and login are delegated to an external auth service.

use async_trait::async_trait;

use crate::domain::entities::{AuthSession, AuthUser, Credentials, SignUpOutcome};
use crate::error::IdentityError;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register a new account
    async fn sign_up(
        &self,
        credentials: &Credentials,
        redirect_url: Option<&str>,
    ) -> Result<SignUpOutcome, IdentityError>;

    /// Exchange email and password for a session
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, IdentityError>;

    /// Revoke the session behind an access token
    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError>;

    /// Resolve an access token to its account
    async fn get_user(&self, access_token: &str) -> Result<AuthUser, IdentityError>;
}
