//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use store_core::{PlatformTag, UserRole};

// ============================================================================
// Common Response Types
// ============================================================================

/// Body carrying only a confirmation message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Offset pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct PaginationMeta {
    /// Games matching the platform filter
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

// ============================================================================
// Game Responses
// ============================================================================

/// Game as shown in the storefront
#[derive(Debug, Clone, Serialize)]
pub struct GameResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub developer_id: Option<i32>,
    pub developer_name: Option<String>,
    pub platform: PlatformTag,
    pub base_price: f64,
    pub discount_percentage: u8,
    pub final_price: f64,
    pub stock: i32,
    pub release_date: Option<NaiveDate>,
    /// `/uploads/games/<file>` or null
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One catalog page
#[derive(Debug, Clone, Serialize)]
pub struct GameListResponse {
    pub games: Vec<GameResponse>,
    pub pagination: PaginationMeta,
}

/// Result of a create or update
#[derive(Debug, Clone, Serialize)]
pub struct GameMutationResponse {
    pub message: String,
    pub game: GameResponse,
}

impl GameMutationResponse {
    pub fn created(game: GameResponse) -> Self {
        Self {
            message: "Juego creado exitosamente".to_string(),
            game,
        }
    }

    pub fn updated(game: GameResponse) -> Self {
        Self {
            message: "Juego actualizado exitosamente".to_string(),
            game,
        }
    }
}

// ============================================================================
// Featured Responses
// ============================================================================

/// Featured game: the game fields plus its position
#[derive(Debug, Clone, Serialize)]
pub struct FeaturedGameResponse {
    #[serde(flatten)]
    pub game: GameResponse,
    pub position: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturedUpdateResponse {
    pub message: String,
    #[serde(rename = "featuredGames")]
    pub featured_games: Vec<i32>,
}

impl FeaturedUpdateResponse {
    pub fn new(featured_games: Vec<i32>) -> Self {
        Self {
            message: "Juegos destacados actualizados exitosamente".to_string(),
            featured_games,
        }
    }
}

// ============================================================================
// Reference Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct DeveloperResponse {
    pub id: i32,
    pub name: String,
    pub country: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Platform or category row
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceResponse {
    pub id: i32,
    pub name: String,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// User summary returned by registration
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUserResponse {
    pub id: i32,
    pub username: Option<String>,
    pub email: String,
    pub role: UserRole,
}

/// User summary returned by login
#[derive(Debug, Clone, Serialize)]
pub struct LoggedInUserResponse {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub token: String,
    pub user: RegisteredUserResponse,
}

impl RegisterResponse {
    pub fn new(token: String, user: RegisteredUserResponse) -> Self {
        Self {
            message: "Usuario registrado exitosamente".to_string(),
            token,
            user,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminRegisterResponse {
    pub message: String,
    pub token: String,
}

impl AdminRegisterResponse {
    pub fn new(token: String) -> Self {
        Self {
            message: "Administrador registrado exitosamente".to_string(),
            token,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: LoggedInUserResponse,
}

impl LoginResponse {
    pub fn new(token: String, user: LoggedInUserResponse) -> Self {
        Self {
            message: "Login exitoso".to_string(),
            token,
            user,
        }
    }
}

// ============================================================================
// Service Responses
// ============================================================================

/// Map of endpoint groups listed on the welcome page
#[derive(Debug, Clone, Serialize)]
pub struct EndpointIndex {
    pub auth: &'static str,
    pub games: &'static str,
    pub platforms: &'static str,
    pub categories: &'static str,
    pub developers: &'static str,
    pub featured: &'static str,
}

/// Body of `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    pub endpoints: EndpointIndex,
}

impl WelcomeResponse {
    pub fn new(version: &'static str) -> Self {
        Self {
            message: "Welcome to Videogames Store API",
            status: "API is running successfully",
            version,
            endpoints: EndpointIndex {
                auth: "/api/auth",
                games: "/api/games",
                platforms: "/api/platforms",
                categories: "/api/categories",
                developers: "/api/developers",
                featured: "/api/featured",
            },
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
