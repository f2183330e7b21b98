//! Game database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Games row joined with its developer name.
///
/// `base_price` is read as `FLOAT8`; the column itself is `NUMERIC(10,2)`.
#[derive(Debug, Clone, FromRow)]
pub struct GameModel {
    pub game_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub developer_id: Option<i32>,
    pub developer_name: Option<String>,
    pub platform: String,
    pub base_price: f64,
    pub discount_percentage: i32,
    pub stock: i32,
    pub release_date: Option<NaiveDate>,
    /// Stored filename, not a URL
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
