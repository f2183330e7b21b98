//! Game entity - a purchasable title in the catalog

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::{final_price, Discount, PlatformTag, Price};

/// Public path prefix under which game images are served
pub const IMAGE_URL_PREFIX: &str = "/uploads/games/";

/// Game entity as read from the catalog (joined with its developer)
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub developer_id: Option<i32>,
    pub developer_name: Option<String>,
    pub platform: PlatformTag,
    pub base_price: Price,
    pub discount: Discount,
    pub stock: i32,
    pub release_date: Option<NaiveDate>,
    /// Stored image filename (not a URL)
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Game {
    /// Price after discount, computed at read time
    pub fn final_price(&self) -> f64 {
        final_price(self.base_price, self.discount)
    }

    /// Check if the game is currently discounted
    #[inline]
    pub fn is_on_sale(&self) -> bool {
        !self.discount.is_zero()
    }

    /// Check if the game has units left
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Public URL of the cover image, if any
    pub fn image_url(&self) -> Option<String> {
        self.image
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| format!("{IMAGE_URL_PREFIX}{name}"))
    }

    /// Editable fields of this game, as a starting point for a partial update
    pub fn to_draft(&self) -> GameDraft {
        GameDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            developer_id: self.developer_id,
            platform: self.platform,
            base_price: self.base_price,
            discount: self.discount,
            stock: self.stock,
            release_date: self.release_date,
            image: self.image.clone(),
        }
    }
}

/// Validated, writable game fields used for inserts and updates
#[derive(Debug, Clone, PartialEq)]
pub struct GameDraft {
    pub title: String,
    pub description: Option<String>,
    pub developer_id: Option<i32>,
    pub platform: PlatformTag,
    pub base_price: Price,
    pub discount: Discount,
    pub stock: i32,
    pub release_date: Option<NaiveDate>,
    pub image: Option<String>,
}

/// One page of catalog results
#[derive(Debug, Clone, Default)]
pub struct GamePage {
    pub games: Vec<Game>,
    /// Games matching the platform filter (the search term is not applied)
    pub total: i64,
}
