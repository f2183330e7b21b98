//! Developer handlers

use axum::{extract::State, Json};
use store_service::dto::DeveloperResponse;
use store_service::DeveloperService;

use crate::extractors::IdPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/developers
pub async fn list_developers(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DeveloperResponse>>> {
    let service = DeveloperService::new(state.service_context());
    Ok(Json(service.list().await?))
}

/// GET /api/developers/:id
pub async fn get_developer(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<DeveloperResponse>> {
    let service = DeveloperService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}
