//! Schema migrations
//!
//! SQL files live in this crate's `migrations/` directory and are applied by
//! the sqlx migrator, which records each applied version in `_sqlx_migrations`.

use std::path::{Path, PathBuf};

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

/// Migrations shipped with this crate
pub const DEFAULT_MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Migration directory, overridable with `MIGRATIONS_DIR` for deployed binaries
pub fn migrations_dir() -> PathBuf {
    std::env::var("MIGRATIONS_DIR")
        .ok()
        .filter(|dir| !dir.trim().is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_MIGRATIONS_DIR), PathBuf::from)
}

/// Apply all pending migrations from `dir`
pub async fn run_migrations(pool: &PgPool, dir: &Path) -> Result<(), MigrateError> {
    let migrator = Migrator::new(dir).await?;
    info!(
        dir = %dir.display(),
        migrations = migrator.iter().count(),
        "Applying database migrations"
    );
    migrator.run(pool).await
}
