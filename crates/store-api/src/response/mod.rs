//! Response types and error handling for API endpoints
//!
//! Provides unified error handling and JSON response formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use store_common::{AppError, ErrorResponse};
use store_core::DomainError;
use store_service::dto::first_validation_message;
use store_service::ServiceError;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{}", first_validation_message(.0))]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    InvalidPath(String),

    #[error("{0}")]
    InvalidQuery(String),

    #[error("{0}")]
    InvalidBody(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_validation() {
                    400
                } else {
                    500
                }
            }
            Self::Validation(_) | Self::InvalidPath(_) | Self::InvalidQuery(_) | Self::InvalidBody(_) => 400,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
            Self::InvalidBody(_) => "INVALID_BODY",
        }
    }

    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// Status and full body, raw detail included for server errors
    fn into_body(self) -> (StatusCode, ErrorResponse) {
        let status = self.status_code();
        let code = self.error_code().to_string();

        let body = match self {
            Self::App(e) => ErrorResponse::from(&e),
            Self::Service(e) => ErrorResponse::from(AppError::from(e)),
            Self::Domain(e) => ErrorResponse::from(AppError::Domain(e)),
            Self::Validation(errors) => ErrorResponse {
                message: first_validation_message(&errors),
                code,
                error: None,
                details: serde_json::to_value(&errors).ok(),
            },
            other => ErrorResponse {
                message: other.to_string(),
                code,
                error: None,
                details: None,
            },
        };

        (status, body)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.into_body();

        // Log server errors
        if status.is_server_error() {
            error!(
                code = %body.code,
                detail = body.error.as_deref().unwrap_or_default(),
                "Server error occurred"
            );
        }

        let mut response = (status, Json(body.without_detail())).into_response();
        if body.error.is_some() {
            // picked up by the development error-detail layer
            response.extensions_mut().insert(body);
        }
        response
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
