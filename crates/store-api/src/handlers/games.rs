//! Game catalog handlers
//!
//! Public listing and lookup, admin create/update/delete with an optional
//! cover image.

use axum::{extract::State, Json};
use store_service::dto::{GameListResponse, GameMutationResponse, GameResponse, MessageResponse};
use store_service::CatalogService;
use tracing::info;

use crate::extractors::{AuthUser, CatalogQueryParams, GameMultipart, IdPath};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List games with filters, search, sort and pagination
///
/// GET /api/games
pub async fn list_games(
    State(state): State<AppState>,
    CatalogQueryParams(query): CatalogQueryParams,
) -> ApiResult<Json<GameListResponse>> {
    let service = CatalogService::new(state.service_context());
    let response = service.list(query).await?;
    Ok(Json(response))
}

/// Get a single game
///
/// GET /api/games/:id
pub async fn get_game(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<GameResponse>> {
    let service = CatalogService::new(state.service_context());
    let response = service.get(id).await?;
    Ok(Json(response))
}

/// Create a game from a multipart form
///
/// POST /api/games
pub async fn create_game(
    State(state): State<AppState>,
    auth: AuthUser,
    GameMultipart(form): GameMultipart,
) -> ApiResult<Created<Json<GameMutationResponse>>> {
    info!(user_id = auth.user_id, "Creating game");
    let service = CatalogService::new(state.service_context());
    let response = service.create(form).await?;
    Ok(Created(Json(response)))
}

/// Update the fields present in the form
///
/// PUT /api/games/:id
pub async fn update_game(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    GameMultipart(form): GameMultipart,
) -> ApiResult<Json<GameMutationResponse>> {
    info!(user_id = auth.user_id, game_id = id, "Updating game");
    let service = CatalogService::new(state.service_context());
    let response = service.update(id, form).await?;
    Ok(Json(response))
}

/// Delete a game and its image
///
/// DELETE /api/games/:id
pub async fn delete_game(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    info!(user_id = auth.user_id, game_id = id, "Deleting game");
    let service = CatalogService::new(state.service_context());
    let response = service.delete(id).await?;
    Ok(Json(response))
}
