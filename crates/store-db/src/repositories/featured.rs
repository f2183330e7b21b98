//! PostgreSQL implementation of FeaturedRepository

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tokio::sync::OnceCell;
use tracing::{instrument, warn};

use store_core::entities::FeaturedGame;
use store_core::traits::{FeaturedRepository, RepoResult};

use crate::models::FeaturedGameModel;

use super::error::map_db_error;
use super::game::GAME_COLUMNS;

const ENSURE_TABLE_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS featured_games (
        id       SERIAL PRIMARY KEY,
        game_id  INT NOT NULL REFERENCES games (game_id) ON DELETE CASCADE,
        position INT NOT NULL DEFAULT 0
    )
";

/// PostgreSQL implementation of FeaturedRepository
///
/// The featured table is created on first use if it does not exist yet.
/// Clones share the same readiness flag.
#[derive(Clone)]
pub struct PgFeaturedRepository {
    pool: PgPool,
    table_ready: Arc<OnceCell<()>>,
}

impl PgFeaturedRepository {
    /// Create a new PgFeaturedRepository
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            table_ready: Arc::new(OnceCell::new()),
        }
    }

    /// Run the idempotent `CREATE TABLE IF NOT EXISTS` once per repository
    async fn ensure_table(&self) -> RepoResult<()> {
        self.table_ready
            .get_or_try_init(|| async {
                sqlx::query(ENSURE_TABLE_SQL)
                    .execute(&self.pool)
                    .await
                    .map(|_| ())
            })
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    async fn write_featured(conn: &mut PgConnection, game_ids: &[i32]) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM featured_games")
            .execute(&mut *conn)
            .await?;

        if !game_ids.is_empty() {
            sqlx::query(
                r"
                INSERT INTO featured_games (game_id, position)
                SELECT t.game_id, (t.ord - 1)::INT
                FROM UNNEST($1::INT[]) WITH ORDINALITY AS t(game_id, ord)
                ",
            )
            .bind(game_ids.to_vec())
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl FeaturedRepository for PgFeaturedRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<FeaturedGame>> {
        self.ensure_table().await?;

        let sql = format!(
            "SELECT {GAME_COLUMNS}, f.position FROM featured_games f \
             JOIN games g ON g.game_id = f.game_id \
             LEFT JOIN developers d ON d.developer_id = g.developer_id \
             ORDER BY f.position ASC, f.id ASC"
        );

        let rows = sqlx::query_as::<_, FeaturedGameModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(FeaturedGame::try_from).collect()
    }

    #[instrument(skip(self), fields(count = game_ids.len()))]
    async fn replace_all(&self, game_ids: &[i32]) -> RepoResult<()> {
        self.ensure_table().await?;

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if let Err(e) = Self::write_featured(&mut *tx, game_ids).await {
            if let Err(rollback_err) = tx.rollback().await {
                warn!(error = %rollback_err, "Rollback of featured replace failed");
            }
            return Err(map_db_error(e));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
