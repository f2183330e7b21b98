//! # store-service
//!
//! Application layer containing business logic, services, DTOs and image storage.

pub mod dto;
pub mod services;
pub mod storage;

pub use dto::{HealthResponse, ReadinessResponse, WelcomeResponse};
pub use services::{
    AuthService, CatalogService, DeveloperService, FeaturedService, ReferenceService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
pub use storage::{ImageStore, ImageUpload};
