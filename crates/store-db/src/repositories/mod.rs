//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in store-core.

mod developer;
mod error;
mod featured;
mod game;
mod reference;
mod user;

pub use developer::PgDeveloperRepository;
pub use featured::PgFeaturedRepository;
pub use game::PgGameRepository;
pub use reference::PgReferenceRepository;
pub use user::PgUserRepository;
