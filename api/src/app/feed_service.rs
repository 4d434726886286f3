//! Feed service
//!
//! Serves the homepage feed and the flat published-post listing.
//! Wraps every data source round trip in a timeout so a stalled database
//! surfaces as `SourceUnavailable` instead of hanging the request.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{FeedView, Post};
use crate::domain::ports::PostRepository;
use crate::error::{AppError, DomainError};
use crate::feed::{self, MAX_LIST_LIMIT, MAX_POPULAR_LIMIT, MIN_LIST_LIMIT, MIN_POPULAR_LIMIT};

/// Default data source timeout
pub const DEFAULT_SOURCE_TIMEOUT: Duration = Duration::from_secs(5);

/// Service for building feeds from published posts
pub struct FeedService<PR>
where
    PR: PostRepository + ?Sized,
{
    posts: Arc<PR>,
    timeout: Duration,
}

impl<PR> FeedService<PR>
where
    PR: PostRepository + ?Sized,
{
    pub fn new(posts: Arc<PR>) -> Self {
        Self {
            posts,
            timeout: DEFAULT_SOURCE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the homepage feed: the latest post plus up to `popular_limit` older ones
    pub async fn build_feed(&self, popular_limit: i64) -> Result<FeedView, AppError> {
        let popular_limit = feed::check_limit(
            "popular_limit",
            popular_limit,
            MIN_POPULAR_LIMIT,
            MAX_POPULAR_LIMIT,
        )?;

        let page = self
            .with_timeout_guard(self.posts.list_published(feed::fetch_size(popular_limit)))
            .await?;
        let fetched = page.len();

        let view = feed::assemble(page, popular_limit)?;

        tracing::debug!(
            popular_limit,
            fetched,
            popular = view.popular.len(),
            has_latest = view.latest.is_some(),
            "Built feed"
        );

        Ok(view)
    }

    /// List up to `limit` published posts, newest first
    pub async fn list_published(&self, limit: i64) -> Result<Vec<Post>, AppError> {
        let limit = feed::check_limit("limit", limit, MIN_LIST_LIMIT, MAX_LIST_LIMIT)?;

        let page = self
            .with_timeout_guard(self.posts.list_published(limit))
            .await?;

        let mut posts = feed::normalize(page)?;
        posts.truncate(limit as usize);

        Ok(posts)
    }

    async fn with_timeout_guard<T>(
        &self,
        fut: impl Future<Output = Result<T, DomainError>>,
    ) -> Result<T, DomainError> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::SourceUnavailable(format!(
                "post query timed out after {}ms",
                self.timeout.as_millis()
            ))),
        }
    }
}
