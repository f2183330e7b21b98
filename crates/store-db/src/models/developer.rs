//! Developer database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for developers table
#[derive(Debug, Clone, FromRow)]
pub struct DeveloperModel {
    pub developer_id: i32,
    pub name: String,
    pub country: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
}
