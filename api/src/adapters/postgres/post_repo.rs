//! PostgreSQL adapter for PostRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use super::map_db_err;
use crate::domain::entities::{Post, PostId, UserId};
use crate::domain::ports::PostRepository;
use crate::entity::posts;
use crate::error::DomainError;

/// PostgreSQL implementation of PostRepository
pub struct PostgresPostRepository {
    db: DatabaseConnection,
}

impl PostgresPostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_published(&self, limit: u64) -> Result<Vec<Post>, DomainError> {
        let results = posts::Entity::find()
            .filter(posts::Column::IsPublished.eq(true))
            .order_by_desc(posts::Column::CreatedAt)
            .order_by_desc(posts::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<posts::Model> for Post {
    fn from(model: posts::Model) -> Self {
        Post {
            id: PostId(model.id),
            title: model.title,
            description: model.description,
            image_url: model.image_url,
            author_id: model.author_id.map(UserId),
            is_published: model.is_published,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
