//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod auth_service;
pub mod feed_service;
pub mod profile_service;

pub use auth_service::AuthService;
pub use feed_service::FeedService;
pub use profile_service::ProfileService;
