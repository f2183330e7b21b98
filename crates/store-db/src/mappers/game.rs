//! Game model -> entity mapper

use store_core::entities::Game;
use store_core::error::DomainError;
use store_core::value_objects::{Discount, PlatformTag, Price};

use crate::models::GameModel;

impl TryFrom<GameModel> for Game {
    type Error = DomainError;

    fn try_from(model: GameModel) -> Result<Self, Self::Error> {
        let corrupt = |what: &str| {
            DomainError::DatabaseError(format!("game {} has an invalid {what}", model.game_id))
        };

        let platform = model
            .platform
            .parse::<PlatformTag>()
            .map_err(|_| corrupt("platform"))?;
        let base_price = Price::new(model.base_price).map_err(|_| corrupt("base_price"))?;
        let discount = Discount::new(i64::from(model.discount_percentage))
            .map_err(|_| corrupt("discount_percentage"))?;

        Ok(Game {
            id: model.game_id,
            title: model.title,
            description: model.description,
            developer_id: model.developer_id,
            developer_name: model.developer_name,
            platform,
            base_price,
            discount,
            stock: model.stock,
            release_date: model.release_date,
            image: model.image_url,
            created_at: model.created_at,
        })
    }
}

/// Price as bound into a `$n::NUMERIC(10,2)` parameter
#[inline]
pub fn price_to_db(price: Price) -> f64 {
    price.amount()
}

/// Discount as stored in `discount_percentage`
#[inline]
pub fn discount_to_db(discount: Discount) -> i32 {
    i32::from(discount.percent())
}
