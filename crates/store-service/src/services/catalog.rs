//! Catalog service
//!
//! Public game listing and the admin create/update/delete flow, including
//! the cover image lifecycle.

use store_core::{CatalogQuery, DomainError, Game};
use tracing::{info, instrument};

use crate::dto::{
    GameForm, GameListResponse, GameMutationResponse, GameResponse, MessageResponse,
    PaginationMeta,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Catalog service
pub struct CatalogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CatalogService<'a> {
    /// Create a new CatalogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// One page of the catalog
    #[instrument(skip(self))]
    pub async fn list(&self, query: CatalogQuery) -> ServiceResult<GameListResponse> {
        let page = self.ctx.game_repo().list(&query).await?;

        Ok(GameListResponse {
            games: page.games.iter().map(GameResponse::from).collect(),
            pagination: PaginationMeta {
                total: page.total,
                limit: query.limit,
                offset: query.offset,
            },
        })
    }

    /// Get a game by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> ServiceResult<GameResponse> {
        Ok(GameResponse::from(self.find(id).await?))
    }

    /// Create a game from the admin form
    #[instrument(skip(self, form))]
    pub async fn create(&self, form: GameForm) -> ServiceResult<GameMutationResponse> {
        let (changes, image) = form.into_changes()?;
        if let Some(upload) = &image {
            self.ctx.image_store().validate(upload)?;
        }
        changes.ensure_required()?;

        let developer_id = match changes.developer_name.clone().flatten() {
            Some(name) => Some(self.ctx.developer_repo().upsert_by_name(&name).await?),
            None => None,
        };

        let stored = match &image {
            Some(upload) => Some(self.ctx.image_store().save(upload).await?),
            None => None,
        };

        let draft = changes.into_new_draft(developer_id, stored.clone())?;
        let id = match self.ctx.game_repo().create(&draft).await {
            Ok(id) => id,
            Err(e) => {
                if let Some(file) = &stored {
                    self.ctx.image_store().remove_best_effort(file).await;
                }
                return Err(e.into());
            }
        };

        info!(game_id = id, title = %draft.title, "Game created");
        let game = self.find(id).await?;
        Ok(GameMutationResponse::created(GameResponse::from(game)))
    }

    /// Apply the sent fields of the admin form to an existing game
    #[instrument(skip(self, form))]
    pub async fn update(&self, id: i32, form: GameForm) -> ServiceResult<GameMutationResponse> {
        let (changes, image) = form.into_changes()?;
        if let Some(upload) = &image {
            self.ctx.image_store().validate(upload)?;
        }

        let current = self.find(id).await?;
        let previous_image = current.image.clone();

        let developer_id = match &changes.developer_name {
            Some(Some(name)) => Some(Some(self.ctx.developer_repo().upsert_by_name(name).await?)),
            Some(None) => Some(None),
            None => None,
        };

        let mut draft = current.to_draft();
        changes.apply_to(&mut draft, developer_id);

        let stored = match &image {
            Some(upload) => Some(self.ctx.image_store().save(upload).await?),
            None => None,
        };
        if let Some(file) = &stored {
            draft.image = Some(file.clone());
        }

        let updated = match self.ctx.game_repo().update(id, &draft).await {
            Ok(updated) => updated,
            Err(e) => {
                if let Some(file) = &stored {
                    self.ctx.image_store().remove_best_effort(file).await;
                }
                return Err(e.into());
            }
        };
        if !updated {
            // deleted between the read and the write
            if let Some(file) = &stored {
                self.ctx.image_store().remove_best_effort(file).await;
            }
            return Err(DomainError::GameNotFound(id).into());
        }

        if stored.is_some() {
            if let Some(old) = previous_image.as_deref().filter(|f| !f.is_empty()) {
                self.ctx.image_store().remove_best_effort(old).await;
            }
        }

        info!(game_id = id, "Game updated");
        let game = self.find(id).await?;
        Ok(GameMutationResponse::updated(GameResponse::from(game)))
    }

    /// Hard-delete a game and its image
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<MessageResponse> {
        let image = self
            .ctx
            .game_repo()
            .delete(id)
            .await?
            .ok_or(DomainError::GameNotFound(id))?;

        if let Some(file) = image.as_deref().filter(|f| !f.is_empty()) {
            self.ctx.image_store().remove_best_effort(file).await;
        }

        info!(game_id = id, "Game deleted");
        Ok(MessageResponse::new("Juego eliminado exitosamente"))
    }

    async fn find(&self, id: i32) -> ServiceResult<Game> {
        self.ctx
            .game_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::GameNotFound(id).into())
    }
}
