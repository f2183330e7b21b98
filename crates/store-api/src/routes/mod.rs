//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, developers, featured, games, health, reference, root};
use crate::middleware::API_PREFIX;
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::welcome))
        .nest(API_PREFIX, api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(game_routes())
        .merge(developer_routes())
        .merge(reference_routes())
        .merge(featured_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/register-admin", post(auth::register_admin))
        .route("/auth/login", post(auth::login))
}

/// Game catalog routes
fn game_routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(games::list_games).post(games::create_game))
        .route(
            "/games/:id",
            get(games::get_game)
                .put(games::update_game)
                .delete(games::delete_game),
        )
}

fn developer_routes() -> Router<AppState> {
    Router::new()
        .route("/developers", get(developers::list_developers))
        .route("/developers/:id", get(developers::get_developer))
}

fn reference_routes() -> Router<AppState> {
    Router::new()
        .route("/platforms", get(reference::list_platforms))
        .route("/categories", get(reference::list_categories))
}

fn featured_routes() -> Router<AppState> {
    Router::new().route(
        "/featured",
        get(featured::list_featured).put(featured::replace_featured),
    )
}
