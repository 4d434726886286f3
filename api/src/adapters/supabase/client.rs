//! Supabase auth client implementation

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{AuthSession, AuthUser, Credentials, SignUpOutcome};
use crate::domain::ports::IdentityProvider;
use crate::error::IdentityError;

/// Implementation of the identity provider over Supabase auth
pub struct SupabaseIdentityProvider {
    http: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseIdentityProvider {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.base_url, path)
    }

    /// Attach the project key; `bearer` overrides the Authorization header for user calls
    fn request(&self, builder: RequestBuilder, bearer: Option<&str>) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(bearer.unwrap_or(&self.api_key))
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, IdentityError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| IdentityError::Deserialization(e.to_string()))
        } else {
            Err(error_for_status(status.as_u16(), response).await)
        }
    }

    async fn handle_empty_response(
        &self,
        response: reqwest::Response,
    ) -> Result<(), IdentityError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(error_for_status(status.as_u16(), response).await)
        }
    }
}

async fn error_for_status(status: u16, response: reqwest::Response) -> IdentityError {
    match status {
        401 | 403 => IdentityError::Unauthorized,
        429 => IdentityError::RateLimited,
        _ => {
            let body = response.text().await.unwrap_or_default();
            IdentityError::Api {
                status,
                message: error_message(&body),
            }
        }
    }
}

/// Pull the human-readable message out of a GoTrue error body
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|e| e.msg.or(e.error_description).or(e.message))
        .unwrap_or_else(|| body.to_string())
}

#[derive(Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
}

/// Request types for the auth API
#[derive(Serialize)]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Signup answers with a session when email confirmation is disabled,
/// otherwise with the bare user
#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(AuthSession),
    User(AuthUser),
}

impl From<SignUpResponse> for SignUpOutcome {
    fn from(r: SignUpResponse) -> Self {
        match r {
            SignUpResponse::Session(session) => SignUpOutcome {
                user: session.user.clone(),
                session: Some(session),
            },
            SignUpResponse::User(user) => SignUpOutcome {
                user,
                session: None,
            },
        }
    }
}

#[async_trait]
impl IdentityProvider for SupabaseIdentityProvider {
    async fn sign_up(
        &self,
        credentials: &Credentials,
        redirect_url: Option<&str>,
    ) -> Result<SignUpOutcome, IdentityError> {
        let mut builder = self.http.post(self.auth_url("/signup"));
        if let Some(redirect) = redirect_url {
            builder = builder.query(&[("redirect_to", redirect)]);
        }

        let response = self
            .request(builder, None)
            .json(&PasswordRequest {
                email: &credentials.email,
                password: &credentials.password,
            })
            .send()
            .await?;

        let body: SignUpResponse = self.handle_response(response).await?;
        Ok(body.into())
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, IdentityError> {
        let builder = self
            .http
            .post(self.auth_url("/token"))
            .query(&[("grant_type", "password")]);

        let response = self
            .request(builder, None)
            .json(&PasswordRequest {
                email: &credentials.email,
                password: &credentials.password,
            })
            .send()
            .await?;

        // GoTrue reports wrong email/password as 400 invalid_grant
        if response.status().as_u16() == 400 {
            return Err(IdentityError::InvalidCredentials);
        }

        self.handle_response(response).await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError> {
        let response = self
            .request(self.http.post(self.auth_url("/logout")), Some(access_token))
            .send()
            .await?;

        self.handle_empty_response(response).await
    }

    async fn get_user(&self, access_token: &str) -> Result<AuthUser, IdentityError> {
        let response = self
            .request(self.http.get(self.auth_url("/user")), Some(access_token))
            .send()
            .await?;

        self.handle_response(response).await
    }
}

/// Identity provider used when no Supabase credentials are configured
///
/// Every call fails with `NotConfigured` so the rest of the API keeps serving.
pub struct DisabledIdentityProvider;

#[async_trait]
impl IdentityProvider for DisabledIdentityProvider {
    async fn sign_up(
        &self,
        _credentials: &Credentials,
        _redirect_url: Option<&str>,
    ) -> Result<SignUpOutcome, IdentityError> {
        Err(IdentityError::NotConfigured)
    }

    async fn sign_in(&self, _credentials: &Credentials) -> Result<AuthSession, IdentityError> {
        Err(IdentityError::NotConfigured)
    }

    async fn sign_out(&self, _access_token: &str) -> Result<(), IdentityError> {
        Err(IdentityError::NotConfigured)
    }

    async fn get_user(&self, _access_token: &str) -> Result<AuthUser, IdentityError> {
        Err(IdentityError::NotConfigured)
    }
}
