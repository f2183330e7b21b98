//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table (without the password hash)
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub user_id: i32,
    pub username: Option<String>,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}
