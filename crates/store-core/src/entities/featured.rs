//! Featured game - a catalog entry pinned to the storefront home page

use super::game::Game;

/// A game together with its position in the featured list
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedGame {
    pub game: Game,
    /// 0-based ordinal, ascending
    pub position: i32,
}
