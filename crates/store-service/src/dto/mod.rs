//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

use validator::ValidationErrors;

pub use requests::{
    CatalogParams, FeaturedUpdateRequest, GameChanges, GameForm, LoginRequest,
    RegisterAdminRequest, RegisterRequest, MAX_DEVELOPER_NAME_LEN, MAX_TITLE_LEN,
    REQUIRED_FIELDS_MESSAGE,
};

pub use responses::{
    AdminRegisterResponse, DeveloperResponse, EndpointIndex, FeaturedGameResponse,
    FeaturedUpdateResponse, GameListResponse, GameMutationResponse, GameResponse, HealthChecks,
    HealthResponse, LoggedInUserResponse, LoginResponse, MessageResponse, PaginationMeta,
    ReadinessResponse, ReferenceResponse, RegisterResponse, RegisteredUserResponse,
    WelcomeResponse,
};

/// Fallback when a validation error carries no message
pub const INVALID_DATA_MESSAGE: &str = "Datos inválidos";

/// Message of the first failing field, fields taken in name order
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|err| err.message.as_ref().map(ToString::to_string))
        .unwrap_or_else(|| INVALID_DATA_MESSAGE.to_string())
}
