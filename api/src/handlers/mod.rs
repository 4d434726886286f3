//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.
//! JSON by default; `Accept: text/plain` gets the rendered markdown view
//! where one exists.

pub mod auth;
pub mod feed;
pub mod homepage;
pub mod posts;
pub mod profile;

use axum::http::{header, HeaderMap};

pub use auth::{auth_health, current_user, login, logout, signup};
pub use feed::get_feed;
pub use homepage::get_homepage;
pub use posts::list_posts;
pub use profile::{get_profile, get_user_by_id};

/// Check if the client asked for plain text rather than JSON
fn wants_text(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("text/plain") && !v.contains("application/json"))
        .unwrap_or(false)
}
