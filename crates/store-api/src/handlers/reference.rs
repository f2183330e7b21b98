//! Platform and category reference lists

use axum::{extract::State, Json};
use store_service::dto::ReferenceResponse;
use store_service::ReferenceService;

use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/platforms
pub async fn list_platforms(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ReferenceResponse>>> {
    let service = ReferenceService::new(state.service_context());
    Ok(Json(service.platforms().await?))
}

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ReferenceResponse>>> {
    let service = ReferenceService::new(state.service_context());
    Ok(Json(service.categories().await?))
}
