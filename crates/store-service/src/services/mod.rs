//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod catalog;
pub mod context;
pub mod developer;
pub mod error;
pub mod featured;
pub mod reference;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use auth::{AuthService, DEFAULT_ADMIN_NAME};
pub use catalog::CatalogService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use developer::DeveloperService;
pub use error::{ServiceError, ServiceResult};
pub use featured::FeaturedService;
pub use reference::ReferenceService;
