//! # store-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, verify_password, Claims, JwtService, PasswordService};
pub use config::{
    AdminConfig, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, DatabaseParts,
    DatabaseTarget, Environment, JwtConfig, RateLimitConfig, ServerConfig, StorageConfig,
};
pub use error::{AppError, AppResult, ErrorResponse, SERVER_ERROR_MESSAGE};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
