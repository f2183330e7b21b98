//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Juego no encontrado")]
    GameNotFound(i32),

    #[error("Developer not found")]
    DeveloperNotFound(i32),

    #[error("User not found: {0}")]
    UserNotFound(i32),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{0}")]
    ValidationError(String),

    #[error("El precio debe ser mayor o igual a 0")]
    InvalidPrice,

    #[error("El descuento debe estar entre 0 y 100")]
    InvalidDiscount,

    #[error("Invalid platform: {0}")]
    InvalidPlatform(String),

    #[error("Invalid sort order: {0}")]
    InvalidSort(String),

    #[error("Usuario o email ya existe")]
    UserAlreadyExists,

    #[error("El email ya está registrado")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::GameNotFound(_) => "UNKNOWN_GAME",
            Self::DeveloperNotFound(_) => "UNKNOWN_DEVELOPER",
            Self::UserNotFound(_) => "UNKNOWN_USER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidPrice => "INVALID_PRICE",
            Self::InvalidDiscount => "INVALID_DISCOUNT",
            Self::InvalidPlatform(_) => "INVALID_PLATFORM",
            Self::InvalidSort(_) => "INVALID_SORT",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::GameNotFound(_) | Self::DeveloperNotFound(_) | Self::UserNotFound(_)
        )
    }

    /// Check if this is a validation error (rejected before anything is written)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidPrice
                | Self::InvalidDiscount
                | Self::InvalidPlatform(_)
                | Self::InvalidSort(_)
                | Self::UserAlreadyExists
                | Self::EmailAlreadyExists
        )
    }

    /// Check if this error comes from infrastructure rather than the request
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::DatabaseError(_) | Self::StorageError(_) | Self::InternalError(_)
        )
    }
}
