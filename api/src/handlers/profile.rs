//! Profile handlers

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::wants_text;
use crate::domain::entities::{User, UserId};
use crate::error::AppError;
use crate::feed::render_profile;
use crate::AppState;

/// Public profile
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub bio: String,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub created_at: String,
}

impl From<User> for ProfileResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            username: u.username,
            display_name: u.display_name,
            bio: u.bio,
            avatar_url: u.avatar_url,
            is_active: u.is_active,
            created_at: u.created_at.to_rfc3339(),
        }
    }
}

fn respond(user: User, headers: &HeaderMap) -> Response {
    if wants_text(headers) {
        (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_profile(&user),
        )
            .into_response()
    } else {
        Json(ProfileResponse::from(user)).into_response()
    }
}

/// GET /profile/:username
pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let user = state.profile_service.get_by_username(&username).await?;
    Ok(respond(user, &headers))
}

/// GET /users/:id
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let user_id: UserId = id.parse().map_err(AppError::BadRequest)?;

    let user = state.profile_service.get_by_id(&user_id).await?;
    Ok(respond(user, &headers))
}
