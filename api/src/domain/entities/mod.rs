//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod auth;
pub mod feed;
pub mod post;
pub mod user;

pub use auth::{AuthSession, AuthUser, Credentials, SignUp, SignUpOutcome};
pub use feed::FeedView;
pub use post::{Post, PostId};
pub use user::{User, UserId};
