//! Feed renderer
//!
//! Renders feeds and profiles to plain-text markdown for clients that ask
//! for `text/plain`.

use crate::domain::entities::{FeedView, Post, User};

/// Render the homepage feed to markdown format
pub fn render_feed(feed: &FeedView) -> String {
    let mut buf = String::new();

    buf.push_str("# FIKSI Feed\n\n");

    match &feed.latest {
        Some(latest) => {
            buf.push_str("## Latest\n\n");
            buf.push_str(&render_post(None, latest));
            buf.push('\n');
        }
        None => {
            buf.push_str("_No posts published yet._\n");
            return buf;
        }
    }

    buf.push_str("## Popular\n\n");
    if feed.popular.is_empty() {
        buf.push_str("_Nothing else yet._\n");
    } else {
        for (i, post) in feed.popular.iter().enumerate() {
            buf.push_str(&render_post(Some(i + 1), post));
        }
    }

    buf
}

/// Render a flat post listing
pub fn render_posts(posts: &[Post]) -> String {
    let mut buf = String::new();
    buf.push_str("# Posts\n\n");

    if posts.is_empty() {
        buf.push_str("_No posts published yet._\n");
        return buf;
    }

    for (i, post) in posts.iter().enumerate() {
        buf.push_str(&render_post(Some(i + 1), post));
    }

    buf
}

/// Render a user profile
pub fn render_profile(user: &User) -> String {
    let mut buf = String::new();

    let name = user.display_name.as_deref().unwrap_or(&user.username);
    buf.push_str(&format!("# {} (@{})\n\n", name, user.username));

    if !user.bio.is_empty() {
        buf.push_str(&format!("{}\n\n", user.bio));
    }

    buf.push_str(&format!(
        "- **Member since:** {}\n",
        user.created_at.format("%Y-%m-%d")
    ));

    buf
}

fn render_post(index: Option<usize>, post: &Post) -> String {
    let prefix = index.map(|i| format!("[{}] ", i)).unwrap_or_default();
    let description = post
        .description
        .as_ref()
        .map(|d| format!(" - {}", truncate(d, 80)))
        .unwrap_or_default();

    format!(
        "{}{}{}\n    {}\n",
        prefix,
        post.title,
        description,
        post.created_at.format("%Y-%m-%d %H:%M UTC")
    )
}

/// Truncate a string with ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
