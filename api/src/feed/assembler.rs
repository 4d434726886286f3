//! Feed assembly
//!
//! Splits a recency-ordered page of posts into the homepage "latest" post and
//! the bounded "popular" list that follows it.

use std::collections::HashSet;

use crate::domain::entities::{FeedView, Post};
use crate::error::DomainError;

/// Smallest accepted `popular_limit`
pub const MIN_POPULAR_LIMIT: u64 = 1;
/// Largest accepted `popular_limit`
pub const MAX_POPULAR_LIMIT: u64 = 20;
/// Smallest accepted flat listing limit
pub const MIN_LIST_LIMIT: u64 = 1;
/// Largest accepted flat listing limit
pub const MAX_LIST_LIMIT: u64 = 50;

/// Clamp a requested popular limit into range
pub fn clamp_popular_limit(limit: u64) -> u64 {
    limit.clamp(MIN_POPULAR_LIMIT, MAX_POPULAR_LIMIT)
}

/// Number of rows to fetch so `latest` can be carved off without shrinking `popular`
pub fn fetch_size(popular_limit: u64) -> u64 {
    clamp_popular_limit(popular_limit) + 1
}

/// Check `limit` against an inclusive range, naming the parameter in the error
pub fn check_limit(name: &str, limit: i64, min: u64, max: u64) -> Result<u64, DomainError> {
    if limit < min as i64 || limit > max as i64 {
        return Err(DomainError::InvalidArgument(format!(
            "{} must be between {} and {}, got {}",
            name, min, max, limit
        )));
    }
    Ok(limit as u64)
}

/// Validate, order and dedupe a page of posts from the data source
///
/// Duplicate rows (same id) keep their first occurrence.
pub fn normalize(mut posts: Vec<Post>) -> Result<Vec<Post>, DomainError> {
    for post in &posts {
        post.validate()?;
    }

    posts.sort_by(Post::recency_cmp);

    let mut seen = HashSet::with_capacity(posts.len());
    posts.retain(|p| seen.insert(p.id));

    Ok(posts)
}

/// Build the feed view from a page fetched with [`fetch_size`]
pub fn assemble(posts: Vec<Post>, popular_limit: u64) -> Result<FeedView, DomainError> {
    let popular_limit = clamp_popular_limit(popular_limit) as usize;
    let mut posts = normalize(posts)?.into_iter();

    let Some(latest) = posts.next() else {
        return Ok(FeedView::empty());
    };

    // normalize() already removed every other row carrying latest's id
    let popular = posts.take(popular_limit).collect();

    Ok(FeedView {
        latest: Some(latest),
        popular,
    })
}
