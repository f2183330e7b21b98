//! Authentication extractor
//!
//! Yields the identity verified by the auth gate, or verifies the bearer
//! token itself when the gate did not run.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderMap},
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};
use store_common::{AppError, Claims, JwtService};
use store_core::UserRole;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from JWT token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
    pub email: String,
    pub role: UserRole,
}

impl AuthUser {
    /// Build from verified claims
    pub fn from_claims(claims: &Claims) -> Result<Self, AppError> {
        Ok(Self {
            user_id: claims.user_id()?,
            email: claims.email.clone(),
            role: claims.role,
        })
    }

    /// Verify the bearer token in `headers`
    ///
    /// A missing or empty token is `MissingAuth`; anything that does not
    /// decode is `InvalidToken` or `TokenExpired`.
    pub fn from_headers(headers: &HeaderMap, jwt: &JwtService) -> Result<Self, AppError> {
        if !headers.contains_key(header::AUTHORIZATION) {
            return Err(AppError::MissingAuth);
        }

        let bearer = headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or(AppError::InvalidToken)?;
        let token = bearer.token().trim();
        if token.is_empty() {
            return Err(AppError::MissingAuth);
        }

        let claims = jwt.decode_token(token).map_err(|e| {
            tracing::warn!(error = %e, "Rejected bearer token");
            e
        })?;

        Self::from_claims(&claims)
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let app_state = AppState::from_ref(state);
        Ok(Self::from_headers(&parts.headers, app_state.jwt_service())?)
    }
}
