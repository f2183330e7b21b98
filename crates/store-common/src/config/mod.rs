//! Configuration structs

mod app_config;

pub use app_config::{
    AdminConfig, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, DatabaseParts,
    DatabaseTarget, Environment, JwtConfig, RateLimitConfig, ServerConfig, StorageConfig,
};
