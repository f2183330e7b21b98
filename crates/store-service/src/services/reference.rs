//! Reference data service - platforms and categories

use tracing::instrument;

use crate::dto::ReferenceResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct ReferenceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReferenceService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn platforms(&self) -> ServiceResult<Vec<ReferenceResponse>> {
        let platforms = self.ctx.reference_repo().platforms().await?;
        Ok(platforms.into_iter().map(ReferenceResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn categories(&self) -> ServiceResult<Vec<ReferenceResponse>> {
        let categories = self.ctx.reference_repo().categories().await?;
        Ok(categories.into_iter().map(ReferenceResponse::from).collect())
    }
}
