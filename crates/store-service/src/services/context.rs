//! Service context - dependency container for services
//!
//! Holds all repositories, the image store and the token issuer needed by services.

use std::sync::Arc;

use store_common::auth::JwtService;
use store_core::traits::{
    DeveloperRepository, FeaturedRepository, GameRepository, ReferenceRepository, UserRepository,
};
use store_db::{
    PgDeveloperRepository, PgFeaturedRepository, PgGameRepository, PgPool,
    PgReferenceRepository, PgUserRepository,
};

use crate::storage::ImageStore;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,

    game_repo: Arc<dyn GameRepository>,
    developer_repo: Arc<dyn DeveloperRepository>,
    reference_repo: Arc<dyn ReferenceRepository>,
    featured_repo: Arc<dyn FeaturedRepository>,
    user_repo: Arc<dyn UserRepository>,

    jwt_service: Arc<JwtService>,
    image_store: Arc<ImageStore>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        game_repo: Arc<dyn GameRepository>,
        developer_repo: Arc<dyn DeveloperRepository>,
        reference_repo: Arc<dyn ReferenceRepository>,
        featured_repo: Arc<dyn FeaturedRepository>,
        user_repo: Arc<dyn UserRepository>,
        jwt_service: Arc<JwtService>,
        image_store: Arc<ImageStore>,
    ) -> Self {
        Self {
            pool,
            game_repo,
            developer_repo,
            reference_repo,
            featured_repo,
            user_repo,
            jwt_service,
            image_store,
        }
    }

    /// Wire the PostgreSQL repositories onto one pool
    pub fn with_postgres(
        pool: PgPool,
        jwt_service: Arc<JwtService>,
        image_store: Arc<ImageStore>,
    ) -> Self {
        Self::new(
            pool.clone(),
            Arc::new(PgGameRepository::new(pool.clone())),
            Arc::new(PgDeveloperRepository::new(pool.clone())),
            Arc::new(PgReferenceRepository::new(pool.clone())),
            Arc::new(PgFeaturedRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool)),
            jwt_service,
            image_store,
        )
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    pub fn game_repo(&self) -> &dyn GameRepository {
        self.game_repo.as_ref()
    }

    pub fn developer_repo(&self) -> &dyn DeveloperRepository {
        self.developer_repo.as_ref()
    }

    pub fn reference_repo(&self) -> &dyn ReferenceRepository {
        self.reference_repo.as_ref()
    }

    pub fn featured_repo(&self) -> &dyn FeaturedRepository {
        self.featured_repo.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the game image store
    pub fn image_store(&self) -> &ImageStore {
        self.image_store.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("image_dir", &self.image_store.dir())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
///
/// Repositories left unset fall back to the PostgreSQL implementations.
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    game_repo: Option<Arc<dyn GameRepository>>,
    developer_repo: Option<Arc<dyn DeveloperRepository>>,
    reference_repo: Option<Arc<dyn ReferenceRepository>>,
    featured_repo: Option<Arc<dyn FeaturedRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    image_store: Option<Arc<ImageStore>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn game_repo(mut self, repo: Arc<dyn GameRepository>) -> Self {
        self.game_repo = Some(repo);
        self
    }

    pub fn developer_repo(mut self, repo: Arc<dyn DeveloperRepository>) -> Self {
        self.developer_repo = Some(repo);
        self
    }

    pub fn reference_repo(mut self, repo: Arc<dyn ReferenceRepository>) -> Self {
        self.reference_repo = Some(repo);
        self
    }

    pub fn featured_repo(mut self, repo: Arc<dyn FeaturedRepository>) -> Self {
        self.featured_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn image_store(mut self, store: Arc<ImageStore>) -> Self {
        self.image_store = Some(store);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if the pool, JWT service or image store is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pool = self
            .pool
            .ok_or_else(|| ServiceError::internal("pool is required"))?;
        let jwt_service = self
            .jwt_service
            .ok_or_else(|| ServiceError::internal("jwt_service is required"))?;
        let image_store = self
            .image_store
            .ok_or_else(|| ServiceError::internal("image_store is required"))?;

        Ok(ServiceContext::new(
            pool.clone(),
            self.game_repo
                .unwrap_or_else(|| Arc::new(PgGameRepository::new(pool.clone()))),
            self.developer_repo
                .unwrap_or_else(|| Arc::new(PgDeveloperRepository::new(pool.clone()))),
            self.reference_repo
                .unwrap_or_else(|| Arc::new(PgReferenceRepository::new(pool.clone()))),
            self.featured_repo
                .unwrap_or_else(|| Arc::new(PgFeaturedRepository::new(pool.clone()))),
            self.user_repo
                .unwrap_or_else(|| Arc::new(PgUserRepository::new(pool))),
            jwt_service,
            image_store,
        ))
    }
}
