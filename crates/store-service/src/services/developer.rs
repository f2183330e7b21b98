//! Developer service
//!
//! Read-only access to the studios behind catalog games.

use store_core::DomainError;
use tracing::instrument;

use crate::dto::DeveloperResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Developer service
pub struct DeveloperService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DeveloperService<'a> {
    /// Create a new DeveloperService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All developers, by id
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<DeveloperResponse>> {
        let developers = self.ctx.developer_repo().find_all().await?;
        Ok(developers.into_iter().map(DeveloperResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> ServiceResult<DeveloperResponse> {
        self.ctx
            .developer_repo()
            .find_by_id(id)
            .await?
            .map(DeveloperResponse::from)
            .ok_or_else(|| DomainError::DeveloperNotFound(id).into())
    }
}
