//! Unified error types for the FIKSI API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors (feed assembly, profile lookup)
//! - `IdentityError`: Identity provider client errors
//! - `AppError`: Application layer errors (wraps both for HTTP responses)

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Data source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Invalid record: {0}")]
    RecordInvalid(String),
}

/// Identity provider (Supabase auth) client errors
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Unauthorized - invalid or expired token")]
    Unauthorized,

    #[error("Rate limited")]
    RateLimited,

    #[error("Identity provider not configured")]
    NotConfigured,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, Option<String>) {
        match self {
            AppError::Domain(DomainError::InvalidArgument(msg)) => (
                StatusCode::BAD_REQUEST,
                "Invalid argument",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::SourceUnavailable(msg)) => {
                tracing::error!("Data source unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Service unavailable",
                    None,
                )
            }
            AppError::Domain(DomainError::RecordInvalid(msg)) => {
                tracing::error!("Invalid record from data source: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Identity(e) => {
                match e {
                    IdentityError::InvalidCredentials => (
                        StatusCode::UNAUTHORIZED,
                        "Invalid credentials",
                        None,
                    ),
                    IdentityError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized", None),
                    IdentityError::RateLimited => {
                        (StatusCode::TOO_MANY_REQUESTS, "Rate limited", None)
                    }
                    IdentityError::NotConfigured => {
                        tracing::error!("Identity provider called but not configured");
                        (
                            StatusCode::SERVICE_UNAVAILABLE,
                            "Auth service not configured",
                            None,
                        )
                    }
                    IdentityError::Api { status, message } => {
                        // Only provider validation errors reach the client as-is
                        let http_status = match *status {
                            422 => StatusCode::UNPROCESSABLE_ENTITY,
                            _ => {
                                tracing::error!("Identity provider error: {}", e);
                                StatusCode::BAD_GATEWAY
                            }
                        };
                        (http_status, "Auth service error", Some(message.clone()))
                    }
                    IdentityError::Request(_) | IdentityError::Deserialization(_) => {
                        tracing::error!("Identity provider error: {}", e);
                        (StatusCode::BAD_GATEWAY, "Auth service error", None)
                    }
                }
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized", None),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = self.parts();

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
