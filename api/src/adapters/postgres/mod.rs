//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod post_repo;
pub mod schema;
pub mod user_repo;

#[cfg(test)]
mod integration_tests;

use sea_orm::DbErr;

use crate::error::DomainError;

pub use post_repo::PostgresPostRepository;
pub use schema::ensure_schema;
pub use user_repo::PostgresUserRepository;

/// Map a SeaORM error onto the domain taxonomy
///
/// Decoding failures mean the row does not match the entity shape; anything
/// else means the database could not serve the query.
pub(crate) fn map_db_err(e: DbErr) -> DomainError {
    match e {
        DbErr::Type(_) | DbErr::Json(_) | DbErr::TryIntoErr { .. } => {
            DomainError::RecordInvalid(e.to_string())
        }
        _ => DomainError::SourceUnavailable(e.to_string()),
    }
}
