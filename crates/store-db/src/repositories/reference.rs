//! PostgreSQL implementation of ReferenceRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use store_core::entities::{Category, Platform};
use store_core::traits::{ReferenceRepository, RepoResult};

use crate::models::ReferenceModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReferenceRepository
#[derive(Clone)]
pub struct PgReferenceRepository {
    pool: PgPool,
}

impl PgReferenceRepository {
    /// Create a new PgReferenceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferenceRepository for PgReferenceRepository {
    #[instrument(skip(self))]
    async fn platforms(&self) -> RepoResult<Vec<Platform>> {
        let rows = sqlx::query_as::<_, ReferenceModel>(
            "SELECT platform_id AS id, name FROM platforms ORDER BY platform_id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Platform::from).collect())
    }

    #[instrument(skip(self))]
    async fn categories(&self) -> RepoResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, ReferenceModel>(
            "SELECT category_id AS id, name FROM categories ORDER BY category_id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Category::from).collect())
    }
}
