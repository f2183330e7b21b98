//! In-memory repositories for service unit tests

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use store_common::JwtService;
use store_core::entities::{Category, Developer, FeaturedGame, Game, GameDraft, GamePage, NewUser, Platform, User};
use store_core::traits::{
    DeveloperRepository, FeaturedRepository, GameRepository, ReferenceRepository, RepoResult,
    UserRepository,
};
use store_core::{CatalogQuery, DomainError};
use store_db::PgPool;

use crate::storage::ImageStore;

use super::context::{ServiceContext, ServiceContextBuilder};

pub const TEST_SECRET: &str = "unit-test-secret";

#[derive(Default)]
pub struct MemoryGames {
    pub games: Mutex<Vec<Game>>,
    pub fail_writes: AtomicBool,
    developers: Arc<MemoryDevelopers>,
}

impl MemoryGames {
    pub fn count(&self) -> usize {
        self.games.lock().unwrap().len()
    }

    fn developer_name(&self, id: Option<i32>) -> Option<String> {
        let id = id?;
        self.developers
            .developers
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.name.clone())
    }

    fn check_writable(&self) -> RepoResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(DomainError::DatabaseError("connection reset".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl GameRepository for MemoryGames {
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Game>> {
        Ok(self.games.lock().unwrap().iter().find(|g| g.id == id).cloned())
    }

    async fn list(&self, query: &CatalogQuery) -> RepoResult<GamePage> {
        let games = self.games.lock().unwrap();
        let filtered: Vec<Game> = games
            .iter()
            .filter(|g| query.platform.matches(g.platform))
            .cloned()
            .collect();
        let total = filtered.len() as i64;
        let needle = query.search.as_deref().map(str::to_lowercase);
        let page = filtered
            .into_iter()
            .filter(|g| {
                needle.as_deref().map_or(true, |n| {
                    g.title.to_lowercase().contains(n)
                        || g.developer_name
                            .as_deref()
                            .is_some_and(|d| d.to_lowercase().contains(n))
                })
            })
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect();
        Ok(GamePage { games: page, total })
    }

    async fn create(&self, draft: &GameDraft) -> RepoResult<i32> {
        self.check_writable()?;
        let developer_name = self.developer_name(draft.developer_id);
        let mut games = self.games.lock().unwrap();
        let id = games.iter().map(|g| g.id).max().unwrap_or(0) + 1;
        games.push(Game {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            developer_id: draft.developer_id,
            developer_name,
            platform: draft.platform,
            base_price: draft.base_price,
            discount: draft.discount,
            stock: draft.stock,
            release_date: draft.release_date,
            image: draft.image.clone(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn update(&self, id: i32, draft: &GameDraft) -> RepoResult<bool> {
        self.check_writable()?;
        let developer_name = self.developer_name(draft.developer_id);
        let mut games = self.games.lock().unwrap();
        let Some(game) = games.iter_mut().find(|g| g.id == id) else {
            return Ok(false);
        };
        game.title = draft.title.clone();
        game.description = draft.description.clone();
        game.developer_id = draft.developer_id;
        game.developer_name = developer_name;
        game.platform = draft.platform;
        game.base_price = draft.base_price;
        game.discount = draft.discount;
        game.stock = draft.stock;
        game.release_date = draft.release_date;
        game.image = draft.image.clone();
        Ok(true)
    }

    async fn delete(&self, id: i32) -> RepoResult<Option<Option<String>>> {
        let mut games = self.games.lock().unwrap();
        let Some(index) = games.iter().position(|g| g.id == id) else {
            return Ok(None);
        };
        Ok(Some(games.remove(index).image))
    }
}

#[derive(Default)]
pub struct MemoryDevelopers {
    pub developers: Mutex<Vec<Developer>>,
}

#[async_trait]
impl DeveloperRepository for MemoryDevelopers {
    async fn find_all(&self) -> RepoResult<Vec<Developer>> {
        Ok(self.developers.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Developer>> {
        Ok(self.developers.lock().unwrap().iter().find(|d| d.id == id).cloned())
    }

    async fn upsert_by_name(&self, name: &str) -> RepoResult<i32> {
        let mut developers = self.developers.lock().unwrap();
        if let Some(existing) = developers.iter().find(|d| d.name == name) {
            return Ok(existing.id);
        }
        let id = developers.len() as i32 + 1;
        developers.push(Developer {
            id,
            name: name.to_string(),
            country: None,
            website: None,
            created_at: Utc::now(),
        });
        Ok(id)
    }
}

pub struct MemoryReference;

#[async_trait]
impl ReferenceRepository for MemoryReference {
    async fn platforms(&self) -> RepoResult<Vec<Platform>> {
        Ok(["ps5", "xbox", "pc", "switch"]
            .iter()
            .zip(1..)
            .map(|(name, id)| Platform {
                id,
                name: (*name).to_string(),
            })
            .collect())
    }

    async fn categories(&self) -> RepoResult<Vec<Category>> {
        Ok(vec![Category {
            id: 1,
            name: "Acción".to_string(),
        }])
    }
}

pub struct MemoryFeatured {
    pub ids: Mutex<Vec<i32>>,
    games: Arc<MemoryGames>,
}

#[async_trait]
impl FeaturedRepository for MemoryFeatured {
    async fn find_all(&self) -> RepoResult<Vec<FeaturedGame>> {
        let ids = self.ids.lock().unwrap().clone();
        let games = self.games.games.lock().unwrap();
        Ok(ids
            .iter()
            .zip(0..)
            .filter_map(|(id, position)| {
                games.iter().find(|g| g.id == *id).map(|game| FeaturedGame {
                    game: game.clone(),
                    position,
                })
            })
            .collect())
    }

    async fn replace_all(&self, game_ids: &[i32]) -> RepoResult<()> {
        let known = {
            let games = self.games.games.lock().unwrap();
            game_ids.iter().all(|id| games.iter().any(|g| g.id == *id))
        };
        if !known {
            return Err(DomainError::DatabaseError(
                "violates foreign key constraint".to_string(),
            ));
        }
        *self.ids.lock().unwrap() = game_ids.to_vec();
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryUsers {
    pub users: Mutex<Vec<(User, String)>>,
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.users.lock().unwrap().iter().any(|(u, _)| u.email == email))
    }

    async fn email_or_username_exists(&self, email: &str, username: &str) -> RepoResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|(u, _)| u.email == email || u.username.as_deref() == Some(username)))
    }

    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let mut users = self.users.lock().unwrap();
        let created = User {
            id: users.len() as i32 + 1,
            username: user.username.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            created_at: Utc::now(),
        };
        users.push((created.clone(), password_hash.to_string()));
        Ok(created)
    }

    async fn get_password_hash(&self, id: i32) -> RepoResult<Option<String>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(_, hash)| hash.clone()))
    }
}

/// A context over in-memory repositories plus handles to inspect them
pub struct TestHarness {
    pub ctx: ServiceContext,
    pub games: Arc<MemoryGames>,
    pub developers: Arc<MemoryDevelopers>,
    pub featured: Arc<MemoryFeatured>,
    pub users: Arc<MemoryUsers>,
    pub upload_root: PathBuf,
}

impl TestHarness {
    /// Must be called inside a Tokio runtime; the pool never connects
    pub fn new(max_image_bytes: usize) -> Self {
        let upload_root = std::env::temp_dir().join(format!(
            "store-service-{}-{}",
            std::process::id(),
            rand::random::<u32>()
        ));

        let developers = Arc::new(MemoryDevelopers::default());
        let games = Arc::new(MemoryGames {
            developers: developers.clone(),
            ..Default::default()
        });
        let featured = Arc::new(MemoryFeatured {
            ids: Mutex::new(Vec::new()),
            games: games.clone(),
        });
        let users = Arc::new(MemoryUsers::default());

        let pool = PgPool::connect_lazy("postgres://localhost/unused").unwrap();
        let ctx = ServiceContextBuilder::new()
            .pool(pool)
            .game_repo(games.clone())
            .developer_repo(developers.clone())
            .reference_repo(Arc::new(MemoryReference))
            .featured_repo(featured.clone())
            .user_repo(users.clone())
            .jwt_service(Arc::new(JwtService::new(TEST_SECRET, 3600)))
            .image_store(Arc::new(ImageStore::new(&upload_root, max_image_bytes)))
            .build()
            .unwrap();

        Self {
            ctx,
            games,
            developers,
            featured,
            users,
            upload_root,
        }
    }

    /// Files currently in the game image directory
    pub fn stored_images(&self) -> Vec<String> {
        std::fs::read_dir(self.ctx.image_store().dir())
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Drop for TestHarness {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.upload_root);
    }
}
