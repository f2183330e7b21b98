//! Featured game database model

use sqlx::FromRow;

use super::game::GameModel;

/// Featured row joined with the full game row
#[derive(Debug, Clone, FromRow)]
pub struct FeaturedGameModel {
    #[sqlx(flatten)]
    pub game: GameModel,
    pub position: i32,
}
