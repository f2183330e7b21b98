//! # store-core
//!
//! Domain layer containing catalog entities, value objects and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    normalize_developer_name, Category, Developer, FeaturedGame, Game, GameDraft, GamePage,
    NewUser, Platform, User, UserRole,
};
pub use error::DomainError;
pub use traits::{
    DeveloperRepository, FeaturedRepository, GameRepository, ReferenceRepository, RepoResult,
    UserRepository,
};
pub use value_objects::{
    final_price, CatalogQuery, Discount, PlatformFilter, PlatformTag, Price, SortOrder,
};
