//! Catalog query string extractor

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use store_core::CatalogQuery;
use store_service::dto::CatalogParams;

use crate::response::ApiError;

/// Parsed `platform`, `search`, `sort`, `limit` and `offset` parameters
#[derive(Debug, Clone)]
pub struct CatalogQueryParams(pub CatalogQuery);

#[async_trait]
impl<S> FromRequestParts<S> for CatalogQueryParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<CatalogParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(CatalogQueryParams(params.into_query()?))
    }
}
