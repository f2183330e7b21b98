//! Featured games service
//!
//! Reads the curated home page list and replaces it wholesale.

use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{FeaturedGameResponse, FeaturedUpdateRequest, FeaturedUpdateResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Featured games service
pub struct FeaturedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeaturedService<'a> {
    /// Create a new FeaturedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Featured games by ascending position
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<FeaturedGameResponse>> {
        let featured = self.ctx.featured_repo().find_all().await?;
        Ok(featured.into_iter().map(FeaturedGameResponse::from).collect())
    }

    /// Replace the whole list; position follows the order of the ids
    #[instrument(skip(self, request), fields(count = request.featured_games.len()))]
    pub async fn replace(
        &self,
        request: FeaturedUpdateRequest,
    ) -> ServiceResult<FeaturedUpdateResponse> {
        request.validate()?;

        self.ctx
            .featured_repo()
            .replace_all(&request.featured_games)
            .await?;

        info!("Featured games replaced");
        Ok(FeaturedUpdateResponse::new(request.featured_games))
    }
}
