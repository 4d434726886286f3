//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Post, User, UserId};
use crate::error::DomainError;

/// Read access to published posts
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List up to `limit` published posts, newest first (ties by id descending)
    async fn list_published(&self, limit: u64) -> Result<Vec<Post>, DomainError>;
}

/// Read access to user profiles
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;
}
