//! PostgreSQL implementation of DeveloperRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use store_core::entities::Developer;
use store_core::traits::{DeveloperRepository, RepoResult};

use crate::models::DeveloperModel;

use super::error::map_db_error;

/// PostgreSQL implementation of DeveloperRepository
#[derive(Clone)]
pub struct PgDeveloperRepository {
    pool: PgPool,
}

impl PgDeveloperRepository {
    /// Create a new PgDeveloperRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeveloperRepository for PgDeveloperRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Developer>> {
        let rows = sqlx::query_as::<_, DeveloperModel>(
            r"
            SELECT developer_id, name, country, website, created_at
            FROM developers
            ORDER BY developer_id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Developer::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Developer>> {
        let result = sqlx::query_as::<_, DeveloperModel>(
            r"
            SELECT developer_id, name, country, website, created_at
            FROM developers
            WHERE developer_id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Developer::from))
    }

    #[instrument(skip(self))]
    async fn upsert_by_name(&self, name: &str) -> RepoResult<i32> {
        // the no-op update makes RETURNING yield the existing row on conflict
        let id = sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO developers (name) VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING developer_id
            ",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(id)
    }
}
