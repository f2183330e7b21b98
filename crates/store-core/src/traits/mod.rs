//! Repository traits (ports)

mod repositories;

pub use repositories::{
    DeveloperRepository, FeaturedRepository, GameRepository, ReferenceRepository, RepoResult,
    UserRepository,
};
