//! Auth handlers
//!
//! Signup and login are forwarded to the identity provider.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::Serialize;

use crate::domain::entities::{AuthSession, AuthUser, Credentials, SignUp, SignUpOutcome};
use crate::error::AppError;
use crate::AppState;

/// Extract the access token from the Authorization header
fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AppError::Unauthorized)
}

#[derive(Serialize)]
pub struct AuthHealthResponse {
    pub status: &'static str,
    pub provider_configured: bool,
}

/// GET /auth/health
pub async fn auth_health(State(state): State<AppState>) -> Json<AuthHealthResponse> {
    Json(AuthHealthResponse {
        status: "auth router ready",
        provider_configured: state.config.identity_enabled(),
    })
}

/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignUp>,
) -> Result<(StatusCode, Json<SignUpOutcome>), AppError> {
    let outcome = state.auth_service.sign_up(&request).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<AuthSession>, AppError> {
    Ok(Json(state.auth_service.sign_in(&credentials).await?))
}

/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let token = bearer_token(&headers)?;
    state.auth_service.sign_out(token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /auth/user
pub async fn current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AuthUser>, AppError> {
    let token = bearer_token(&headers)?;
    Ok(Json(state.auth_service.current_user(token).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_err());

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        assert_eq!(bearer_token(&headers).unwrap(), "abc");

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(bearer_token(&headers).is_err());
    }
}
