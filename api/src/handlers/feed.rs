//! Feed handlers
//!
//! Homepage feed: the latest post plus the popular list behind it.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::posts::PostCard;
use super::wants_text;
use crate::error::AppError;
use crate::feed::render_feed;
use crate::AppState;

/// Query params for GET /feed
#[derive(Debug, Deserialize)]
pub struct FeedParams {
    #[serde(default = "default_popular_limit")]
    pub popular_limit: i64,
}

fn default_popular_limit() -> i64 {
    5
}

/// Feed response
#[derive(Serialize)]
pub struct FeedResponse {
    pub status: &'static str,
    pub latest_post: Option<PostCard>,
    pub popular_posts: Vec<PostCard>,
}

/// GET /feed?popular_limit=N
///
/// popular_limit must be within 1..=20.
pub async fn get_feed(
    State(state): State<AppState>,
    params: Result<Query<FeedParams>, QueryRejection>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let Query(params) = params?;
    let feed = state.feed_service.build_feed(params.popular_limit).await?;

    if wants_text(&headers) {
        return Ok((
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_feed(&feed),
        )
            .into_response());
    }

    Ok(Json(FeedResponse {
        status: "ok",
        latest_post: feed.latest.map(PostCard::from),
        popular_posts: feed.popular.into_iter().map(PostCard::from).collect(),
    })
    .into_response())
}
