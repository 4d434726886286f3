//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod postgres;
pub mod supabase;

pub use postgres::{ensure_schema, PostgresPostRepository, PostgresUserRepository};
pub use supabase::{DisabledIdentityProvider, SupabaseIdentityProvider};
