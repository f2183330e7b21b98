//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Unique tag shared by every title one test creates, used as a search term
pub fn unique_tag(prefix: &str) -> String {
    format!("{prefix}{}x{}", std::process::id(), unique_suffix())
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let tag = unique_tag("player");
        Self {
            username: tag.clone(),
            email: format!("{tag}@example.com"),
            password: "TestPass123".to_string(),
        }
    }
}

/// Administrator registration request
#[derive(Debug, Serialize)]
pub struct RegisterAdminRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

impl RegisterAdminRequest {
    pub fn unique() -> Self {
        Self {
            email: format!("{}@videogames.com", unique_tag("admin")),
            password: "AdminPass123".to_string(),
            name: None,
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// User summary in auth responses
#[derive(Debug, Deserialize)]
pub struct UserSummary {
    pub id: i32,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Register and login response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserSummary,
}

/// Admin registration response
#[derive(Debug, Deserialize)]
pub struct AdminAuthResponse {
    pub message: String,
    pub token: String,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: String,
}

/// Game response
#[derive(Debug, Clone, Deserialize)]
pub struct GameResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub developer_id: Option<i32>,
    pub developer_name: Option<String>,
    pub platform: String,
    pub base_price: f64,
    pub discount_percentage: u8,
    pub final_price: f64,
    pub stock: i32,
    pub release_date: Option<String>,
    pub image_url: Option<String>,
}

/// Create/update response
#[derive(Debug, Deserialize)]
pub struct GameMutationResponse {
    pub message: String,
    pub game: GameResponse,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct Pagination {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// Catalog page
#[derive(Debug, Deserialize)]
pub struct GameListResponse {
    pub games: Vec<GameResponse>,
    pub pagination: Pagination,
}

/// Featured entry: game fields plus position
#[derive(Debug, Deserialize)]
pub struct FeaturedGame {
    pub id: i32,
    pub title: String,
    pub position: i32,
}

/// Featured replace response
#[derive(Debug, Deserialize)]
pub struct FeaturedUpdateResponse {
    pub message: String,
    #[serde(rename = "featuredGames")]
    pub featured_games: Vec<i32>,
}

/// Featured replace request
#[derive(Debug, Serialize)]
pub struct FeaturedUpdateRequest {
    #[serde(rename = "featuredGames")]
    pub featured_games: Vec<i32>,
}

/// Text fields of the admin game form
#[derive(Debug, Clone, Default)]
pub struct GameFields {
    fields: Vec<(&'static str, String)>,
}

impl GameFields {
    /// Title, platform and price: the required set
    pub fn new(title: &str, platform: &str, base_price: &str) -> Self {
        Self::default()
            .with("title", title)
            .with("platform", platform)
            .with("base_price", base_price)
    }

    pub fn with(mut self, name: &'static str, value: &str) -> Self {
        self.fields.push((name, value.to_string()));
        self
    }

    /// Multipart body without an image
    pub fn form(&self) -> Form {
        self.fields
            .iter()
            .fold(Form::new(), |form, (name, value)| form.text(*name, value.clone()))
    }

    /// Multipart body with an image part
    pub fn form_with_image(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> reqwest::Result<Form> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)?;
        Ok(self.form().part("image", part))
    }
}

/// Smallest valid PNG: 1x1 transparent pixel
pub fn tiny_png() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ]
}

/// Two-decimal rounding used for final prices
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
