//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use store_core::entities::{Category, Developer, FeaturedGame, Game, Platform, User};

use super::responses::{
    DeveloperResponse, FeaturedGameResponse, GameResponse, LoggedInUserResponse, ReferenceResponse,
    RegisteredUserResponse,
};

// ============================================================================
// Game Mappers
// ============================================================================

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            title: game.title.clone(),
            description: game.description.clone(),
            developer_id: game.developer_id,
            developer_name: game.developer_name.clone(),
            platform: game.platform,
            base_price: game.base_price.amount(),
            discount_percentage: game.discount.percent(),
            final_price: game.final_price(),
            stock: game.stock,
            release_date: game.release_date,
            image_url: game.image_url(),
            created_at: game.created_at,
        }
    }
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        Self::from(&game)
    }
}

impl From<FeaturedGame> for FeaturedGameResponse {
    fn from(featured: FeaturedGame) -> Self {
        Self {
            game: GameResponse::from(&featured.game),
            position: featured.position,
        }
    }
}

// ============================================================================
// Reference Mappers
// ============================================================================

impl From<Developer> for DeveloperResponse {
    fn from(developer: Developer) -> Self {
        Self {
            id: developer.id,
            name: developer.name,
            country: developer.country,
            website: developer.website,
            created_at: developer.created_at,
        }
    }
}

impl From<Platform> for ReferenceResponse {
    fn from(platform: Platform) -> Self {
        Self {
            id: platform.id,
            name: platform.name,
        }
    }
}

impl From<Category> for ReferenceResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for RegisteredUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

impl From<&User> for LoggedInUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}
