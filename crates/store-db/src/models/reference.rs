//! Reference table model (platforms, categories)

use sqlx::FromRow;

/// `id`/`name` pair selected from a reference table
#[derive(Debug, Clone, FromRow)]
pub struct ReferenceModel {
    pub id: i32,
    pub name: String,
}
