//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::{Post, PostId, User, UserId};

/// Create a published test post
pub fn test_post() -> Post {
    test_post_at(Utc::now())
}

/// Create a published test post with a specific timestamp
pub fn test_post_at(created_at: DateTime<Utc>) -> Post {
    let id = PostId::new();
    Post {
        id,
        title: format!("Post {}", &id.to_string()[..8]),
        description: Some("A short story about trying to make this work".to_string()),
        image_url: None,
        author_id: Some(UserId::new()),
        is_published: true,
        created_at,
    }
}

/// Create `count` published posts, strictly newest first (T-1, T-2, ...)
pub fn test_posts_newest_first(count: usize) -> Vec<Post> {
    let now = Utc::now();
    (1..=count)
        .map(|i| test_post_at(now - Duration::minutes(i as i64)))
        .collect()
}

/// Create an active test user
pub fn test_user() -> User {
    test_user_named("test-user")
}

/// Create an active test user with a specific username
pub fn test_user_named(username: &str) -> User {
    User {
        id: UserId::new(),
        username: username.to_string(),
        display_name: Some(format!("{} (display)", username)),
        bio: String::new(),
        avatar_url: None,
        is_active: true,
        created_at: Utc::now(),
    }
}
