//! SeaORM entities
//!
//! Table definitions for the relational schema. Domain conversions live in
//! the PostgreSQL adapters.

pub mod posts;
pub mod users;
