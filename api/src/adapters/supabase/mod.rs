//! Supabase adapter
//!
//! Identity provider backed by the Supabase auth (GoTrue) REST API.

pub mod client;

pub use client::{DisabledIdentityProvider, SupabaseIdentityProvider};
