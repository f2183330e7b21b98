//! Database models - SQLx-compatible structs for PostgreSQL tables

mod developer;
mod featured;
mod game;
mod reference;
mod user;

pub use developer::DeveloperModel;
pub use featured::FeaturedGameModel;
pub use game::GameModel;
pub use reference::ReferenceModel;
pub use user::UserModel;
