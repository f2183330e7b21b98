//! Featured model -> entity mapper

use store_core::entities::{FeaturedGame, Game};
use store_core::error::DomainError;

use crate::models::FeaturedGameModel;

impl TryFrom<FeaturedGameModel> for FeaturedGame {
    type Error = DomainError;

    fn try_from(model: FeaturedGameModel) -> Result<Self, Self::Error> {
        Ok(FeaturedGame {
            game: Game::try_from(model.game)?,
            position: model.position,
        })
    }
}
