//! Auth service
//!
//! Validates input and forwards signup/login to the identity provider.

use std::sync::Arc;

use crate::domain::entities::{AuthSession, AuthUser, Credentials, SignUp, SignUpOutcome};
use crate::domain::ports::IdentityProvider;
use crate::error::AppError;

pub struct AuthService<IP>
where
    IP: IdentityProvider + ?Sized,
{
    identity: Arc<IP>,
}

impl<IP> AuthService<IP>
where
    IP: IdentityProvider + ?Sized,
{
    pub fn new(identity: Arc<IP>) -> Self {
        Self { identity }
    }

    pub async fn sign_up(&self, request: &SignUp) -> Result<SignUpOutcome, AppError> {
        request.credentials.validate()?;

        let outcome = self
            .identity
            .sign_up(&request.credentials, request.redirect_url.as_deref())
            .await?;

        tracing::info!(
            user_id = %outcome.user.id,
            confirmed = outcome.session.is_some(),
            "User signed up"
        );

        Ok(outcome)
    }

    pub async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, AppError> {
        credentials.validate()?;

        let session = self.identity.sign_in(credentials).await?;
        tracing::debug!(user_id = %session.user.id, "User signed in");

        Ok(session)
    }

    pub async fn sign_out(&self, access_token: &str) -> Result<(), AppError> {
        Ok(self.identity.sign_out(access_token).await?)
    }

    pub async fn current_user(&self, access_token: &str) -> Result<AuthUser, AppError> {
        Ok(self.identity.get_user(access_token).await?)
    }
}
