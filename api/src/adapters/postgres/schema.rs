//! Schema bootstrap
//!
//! Creates the `users` and `posts` tables when they are missing. Existing
//! tables are left untouched.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::entity::{posts, users};

/// Create any missing tables, parents before children
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table_if_missing(db, users::Entity).await?;
    create_table_if_missing(db, posts::Entity).await?;
    Ok(())
}

async fn create_table_if_missing<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;

    tracing::debug!(table = entity.table_name(), "Table created/verified");
    Ok(())
}
