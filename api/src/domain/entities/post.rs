//! Post domain entity
//!
//! A piece of published content shown on the homepage feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;
use crate::error::DomainError;

/// Unique identifier for a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PostId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A post authored by a user
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub author_id: Option<UserId>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Check the record against the shape the feed relies on
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::RecordInvalid(format!(
                "post {} has an empty title",
                self.id
            )));
        }
        if !self.is_published {
            return Err(DomainError::RecordInvalid(format!(
                "post {} is not published",
                self.id
            )));
        }
        Ok(())
    }

    /// Recency order: newest first, ties broken by id descending
    pub fn recency_cmp(&self, other: &Post) -> std::cmp::Ordering {
        other
            .created_at
            .cmp(&self.created_at)
            .then_with(|| other.id.cmp(&self.id))
    }
}
