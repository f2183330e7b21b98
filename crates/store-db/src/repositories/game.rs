//! PostgreSQL implementation of GameRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use store_core::entities::{Game, GameDraft, GamePage};
use store_core::traits::{GameRepository, RepoResult};
use store_core::value_objects::{CatalogQuery, SortOrder};

use crate::mappers::{discount_to_db, price_to_db};
use crate::models::GameModel;

use super::error::map_db_error;

/// Columns of `GameModel`, selected from `games g LEFT JOIN developers d`
pub(super) const GAME_COLUMNS: &str = r"
    g.game_id, g.title, g.description, g.developer_id, d.name AS developer_name,
    g.platform, g.base_price::FLOAT8 AS base_price, g.discount_percentage, g.stock,
    g.release_date, g.image_url, g.created_at
";

/// Final price expression, matching the domain rounding
const FINAL_PRICE_SQL: &str = "ROUND(g.base_price * (100 - g.discount_percentage) / 100.0, 2)";

/// ORDER BY clause for a catalog sort order
fn order_by(sort: SortOrder) -> String {
    match sort {
        SortOrder::Newest => " ORDER BY g.release_date DESC NULLS LAST, g.game_id DESC".to_string(),
        SortOrder::PriceAsc => format!(" ORDER BY {FINAL_PRICE_SQL} ASC, g.game_id ASC"),
        SortOrder::PriceDesc => format!(" ORDER BY {FINAL_PRICE_SQL} DESC, g.game_id DESC"),
        SortOrder::Name => " ORDER BY LOWER(g.title) ASC, g.game_id ASC".to_string(),
    }
}

/// PostgreSQL implementation of GameRepository
#[derive(Clone)]
pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    /// Create a new PgGameRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameRepository for PgGameRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Game>> {
        let sql = format!(
            "SELECT {GAME_COLUMNS} FROM games g \
             LEFT JOIN developers d ON d.developer_id = g.developer_id \
             WHERE g.game_id = $1"
        );

        let result = sqlx::query_as::<_, GameModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Game::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &CatalogQuery) -> RepoResult<GamePage> {
        let platform = query.platform.tag().map(|tag| tag.as_str());

        let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(format!(
            "SELECT {GAME_COLUMNS} FROM games g \
             LEFT JOIN developers d ON d.developer_id = g.developer_id \
             WHERE 1 = 1"
        ));

        if let Some(platform) = platform {
            builder.push(" AND g.platform = ").push_bind(platform);
        }

        if let Some(pattern) = query.search_pattern() {
            builder
                .push(" AND (g.title ILIKE ")
                .push_bind(pattern.clone())
                .push(r" ESCAPE '\' OR d.name ILIKE ")
                .push_bind(pattern)
                .push(r" ESCAPE '\')");
        }

        builder.push(order_by(query.sort));
        builder
            .push(" LIMIT ")
            .push_bind(query.limit)
            .push(" OFFSET ")
            .push_bind(query.offset);

        let rows = builder
            .build_query_as::<GameModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        // total honours the platform filter only
        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM games g
            WHERE ($1::TEXT IS NULL OR g.platform = $1)
            ",
        )
        .bind(platform)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let games = rows
            .into_iter()
            .map(Game::try_from)
            .collect::<RepoResult<Vec<_>>>()?;

        Ok(GamePage { games, total })
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    async fn create(&self, draft: &GameDraft) -> RepoResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO games (title, description, developer_id, platform, base_price,
                               discount_percentage, stock, release_date, image_url)
            VALUES ($1, $2, $3, $4, $5::NUMERIC(10, 2), $6, $7, $8, $9)
            RETURNING game_id
            ",
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.developer_id)
        .bind(draft.platform.as_str())
        .bind(price_to_db(draft.base_price))
        .bind(discount_to_db(draft.discount))
        .bind(draft.stock)
        .bind(draft.release_date)
        .bind(&draft.image)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self, draft))]
    async fn update(&self, id: i32, draft: &GameDraft) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE games
            SET title = $2, description = $3, developer_id = $4, platform = $5,
                base_price = $6::NUMERIC(10, 2), discount_percentage = $7, stock = $8,
                release_date = $9, image_url = $10
            WHERE game_id = $1
            ",
        )
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.developer_id)
        .bind(draft.platform.as_str())
        .bind(price_to_db(draft.base_price))
        .bind(discount_to_db(draft.discount))
        .bind(draft.stock)
        .bind(draft.release_date)
        .bind(&draft.image)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> RepoResult<Option<Option<String>>> {
        let removed = sqlx::query_scalar::<_, Option<String>>(
            r"
            DELETE FROM games WHERE game_id = $1
            RETURNING image_url
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(removed)
    }
}
