//! Post handlers

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::wants_text;
use crate::domain::entities::Post;
use crate::error::AppError;
use crate::feed::render_posts;
use crate::AppState;

/// Post card for feeds and listings
#[derive(Debug, Serialize)]
pub struct PostCard {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub author_id: Option<String>,
    pub created_at: String,
}

impl From<Post> for PostCard {
    fn from(p: Post) -> Self {
        Self {
            id: p.id.to_string(),
            title: p.title,
            description: p.description,
            image_url: p.image_url,
            author_id: p.author_id.map(|a| a.to_string()),
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

/// Query params for GET /posts
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

#[derive(Serialize)]
pub struct PostListResponse {
    pub status: &'static str,
    pub count: usize,
    pub posts: Vec<PostCard>,
}

/// GET /posts?limit=N
///
/// Published posts, newest first. limit must be within 1..=50.
pub async fn list_posts(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let Query(params) = params?;
    let posts = state.feed_service.list_published(params.limit).await?;

    if wants_text(&headers) {
        return Ok((
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_posts(&posts),
        )
            .into_response());
    }

    Ok(Json(PostListResponse {
        status: "ok",
        count: posts.len(),
        posts: posts.into_iter().map(PostCard::from).collect(),
    })
    .into_response())
}
