//! Domain entities - core business objects

mod developer;
mod featured;
mod game;
mod reference;
mod user;

pub use developer::{normalize_developer_name, Developer};
pub use featured::FeaturedGame;
pub use game::{Game, GameDraft, GamePage};
pub use reference::{Category, Platform};
pub use user::{NewUser, User, UserRole};
