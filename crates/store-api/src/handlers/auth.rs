//! Authentication handlers
//!
//! Endpoints for user registration, administrator registration and login.

use axum::{extract::State, Json};
use store_service::dto::{
    AdminRegisterResponse, LoginRequest, LoginResponse, RegisterAdminRequest, RegisterRequest,
    RegisterResponse,
};
use store_service::AuthService;

use crate::extractors::JsonBody;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new customer account
///
/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> ApiResult<Created<Json<RegisterResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Register an administrator account
///
/// POST /api/auth/register-admin
pub async fn register_admin(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterAdminRequest>,
) -> ApiResult<Created<Json<AdminRegisterResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register_admin(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}
