//! Featured games handlers

use axum::{extract::State, Json};
use store_service::dto::{FeaturedGameResponse, FeaturedUpdateRequest, FeaturedUpdateResponse};
use store_service::FeaturedService;
use tracing::info;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Featured games in display order
///
/// GET /api/featured
pub async fn list_featured(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<FeaturedGameResponse>>> {
    let service = FeaturedService::new(state.service_context());
    Ok(Json(service.list().await?))
}

/// Replace the featured list
///
/// PUT /api/featured
pub async fn replace_featured(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<FeaturedUpdateRequest>,
) -> ApiResult<Json<FeaturedUpdateResponse>> {
    info!(user_id = auth.user_id, "Replacing featured games");
    let service = FeaturedService::new(state.service_context());
    Ok(Json(service.replace(request).await?))
}
