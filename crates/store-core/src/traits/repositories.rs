//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Category, Developer, FeaturedGame, Game, GameDraft, GamePage, NewUser, Platform, User,
};
use crate::error::DomainError;
use crate::value_objects::CatalogQuery;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Game Repository
// ============================================================================

#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Find a game (with its developer name) by ID
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Game>>;

    /// List one page of the catalog
    async fn list(&self, query: &CatalogQuery) -> RepoResult<GamePage>;

    /// Insert a game, returning the new ID
    async fn create(&self, draft: &GameDraft) -> RepoResult<i32>;

    /// Overwrite the writable fields of a game.
    ///
    /// Returns `false` when no game has this ID.
    async fn update(&self, id: i32, draft: &GameDraft) -> RepoResult<bool>;

    /// Delete a game.
    ///
    /// Returns `None` when no game has this ID, otherwise the stored image
    /// filename of the deleted row (which may itself be `None`).
    async fn delete(&self, id: i32) -> RepoResult<Option<Option<String>>>;
}

// ============================================================================
// Developer Repository
// ============================================================================

#[async_trait]
pub trait DeveloperRepository: Send + Sync {
    /// List all developers ordered by ID
    async fn find_all(&self) -> RepoResult<Vec<Developer>>;

    /// Find developer by ID
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Developer>>;

    /// Return the ID of the developer with this exact name, creating it if needed.
    ///
    /// Must be atomic: concurrent calls with the same name yield one row.
    async fn upsert_by_name(&self, name: &str) -> RepoResult<i32>;
}

// ============================================================================
// Reference Repository
// ============================================================================

#[async_trait]
pub trait ReferenceRepository: Send + Sync {
    /// List platforms ordered by ID
    async fn platforms(&self) -> RepoResult<Vec<Platform>>;

    /// List categories ordered by ID
    async fn categories(&self) -> RepoResult<Vec<Category>>;
}

// ============================================================================
// Featured Repository
// ============================================================================

#[async_trait]
pub trait FeaturedRepository: Send + Sync {
    /// Featured games in position order
    async fn find_all(&self) -> RepoResult<Vec<FeaturedGame>>;

    /// Atomically replace the featured list; `game_ids[i]` gets position `i`
    async fn replace_all(&self, game_ids: &[i32]) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if either the email or the username is already taken
    async fn email_or_username_exists(&self, email: &str, username: &str) -> RepoResult<bool>;

    /// Create a new user and return it
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i32) -> RepoResult<Option<String>>;
}
