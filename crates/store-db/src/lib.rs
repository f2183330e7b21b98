//! # store-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `store-core`. It handles:
//!
//! - Connection pool management
//! - Schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use store_db::{create_pool, run_migrations, migrations_dir, PgGameRepository, PoolConfig};
//! use store_core::traits::GameRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::default()).await?;
//!     run_migrations(&pool, &migrations_dir()).await?;
//!     let games = PgGameRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod migrate;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use migrate::{migrations_dir, run_migrations};
pub use pool::{create_pool, ping, PgPool, PoolConfig};
pub use repositories::{
    PgDeveloperRepository, PgFeaturedRepository, PgGameRepository, PgReferenceRepository,
    PgUserRepository,
};
