//! Request DTOs for API endpoints
//!
//! JSON bodies implement `Deserialize` and `Validate`. The multipart game form
//! is collected field by field and parsed explicitly.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use store_core::{
    CatalogQuery, Discount, DomainError, GameDraft, PlatformFilter, PlatformTag, Price, SortOrder,
};

use crate::storage::ImageUpload;

/// Message for a register/login body with blank fields
pub const REQUIRED_FIELDS_MESSAGE: &str = "Todos los campos son requeridos";

/// Longest title the `games` table accepts
pub const MAX_TITLE_LEN: usize = 255;

/// Longest name the `developers` table accepts
pub const MAX_DEVELOPER_NAME_LEN: usize = 255;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(max = 50, message = "El nombre de usuario no puede superar 50 caracteres"))]
    pub username: String,

    #[serde(default)]
    #[validate(
        email(message = "Email inválido"),
        length(max = 255, message = "El email no puede superar 255 caracteres")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    pub password: String,
}

impl RegisterRequest {
    pub fn has_blank_fields(&self) -> bool {
        is_blank(&self.username) || is_blank(&self.email) || self.password.is_empty()
    }
}

/// Admin registration request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterAdminRequest {
    #[serde(default)]
    #[validate(
        email(message = "Email inválido"),
        length(max = 255, message = "El email no puede superar 255 caracteres")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    pub password: String,

    /// Display name, defaults to "Administrador"
    #[serde(default)]
    #[validate(length(max = 100, message = "El nombre no puede superar 100 caracteres"))]
    pub name: Option<String>,
}

impl RegisterAdminRequest {
    pub fn has_blank_fields(&self) -> bool {
        is_blank(&self.email) || self.password.is_empty()
    }
}

/// User login request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}

// ============================================================================
// Featured Requests
// ============================================================================

/// Replace the featured list with these game ids, in order
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct FeaturedUpdateRequest {
    #[serde(rename = "featuredGames", default)]
    #[validate(custom(function = "validate_game_ids"))]
    pub featured_games: Vec<i32>,
}

fn validate_game_ids(ids: &[i32]) -> Result<(), ValidationError> {
    if ids.iter().all(|id| *id > 0) {
        Ok(())
    } else {
        Err(ValidationError::new("positive_ids")
            .with_message(Cow::Borrowed("Los IDs de juegos deben ser enteros positivos")))
    }
}

// ============================================================================
// Catalog Query
// ============================================================================

/// Raw catalog query string parameters
///
/// Kept as strings so that malformed numbers surface as a 400 with a
/// readable message instead of a deserializer rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogParams {
    pub platform: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl CatalogParams {
    /// Parse into a normalized [`CatalogQuery`]
    pub fn into_query(self) -> Result<CatalogQuery, DomainError> {
        let platform = match self.platform.as_deref() {
            Some(raw) => raw.parse::<PlatformFilter>()?,
            None => PlatformFilter::All,
        };
        let sort = match self.sort.as_deref() {
            Some(raw) => raw.parse::<SortOrder>()?,
            None => SortOrder::Newest,
        };
        let limit = parse_page_bound("limit", self.limit.as_deref())?;
        let offset = parse_page_bound("offset", self.offset.as_deref())?;

        Ok(CatalogQuery::new(
            platform,
            self.search.as_deref(),
            sort,
            limit,
            offset,
        ))
    }
}

fn parse_page_bound(name: &str, raw: Option<&str>) -> Result<Option<i64>, DomainError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => value.parse::<i64>().map(Some).map_err(|_| {
            DomainError::ValidationError(format!("El parámetro {name} debe ser un número entero"))
        }),
    }
}

// ============================================================================
// Game Form (multipart)
// ============================================================================

/// Text fields of the multipart game form, as received
#[derive(Debug, Clone, Default)]
pub struct GameForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub developer_name: Option<String>,
    pub platform: Option<String>,
    pub base_price: Option<String>,
    pub discount_percentage: Option<String>,
    pub stock: Option<String>,
    pub release_date: Option<String>,
    pub image: Option<ImageUpload>,
}

impl GameForm {
    /// Store a text field by its form name. Returns `false` for unknown names.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "title" => &mut self.title,
            "description" => &mut self.description,
            "developer_name" => &mut self.developer_name,
            "platform" => &mut self.platform,
            "base_price" => &mut self.base_price,
            "discount_percentage" => &mut self.discount_percentage,
            "stock" => &mut self.stock,
            "release_date" => &mut self.release_date,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Parse every field that was sent. Nothing is required at this stage.
    pub fn into_changes(self) -> Result<(GameChanges, Option<ImageUpload>), DomainError> {
        let title = match present(self.title) {
            Some(title) if title.chars().count() > MAX_TITLE_LEN => {
                return Err(DomainError::ValidationError(format!(
                    "El título no puede superar {MAX_TITLE_LEN} caracteres"
                )));
            }
            other => other,
        };

        let developer_name = match clearable(self.developer_name)
            .map(|name| name.and_then(|n| store_core::normalize_developer_name(&n)))
        {
            Some(Some(name)) if name.chars().count() > MAX_DEVELOPER_NAME_LEN => {
                return Err(DomainError::ValidationError(format!(
                    "El nombre del desarrollador no puede superar {MAX_DEVELOPER_NAME_LEN} caracteres"
                )));
            }
            other => other,
        };

        let changes = GameChanges {
            title,
            description: clearable(self.description),
            developer_name,
            platform: present(self.platform)
                .map(|p| p.parse::<PlatformTag>())
                .transpose()?,
            base_price: present(self.base_price)
                .map(|p| Price::parse(&p))
                .transpose()?,
            discount: present(self.discount_percentage)
                .map(|d| Discount::parse(&d))
                .transpose()?,
            stock: present(self.stock).map(|s| parse_stock(&s)).transpose()?,
            release_date: clearable(self.release_date)
                .map(|date| date.map(|d| parse_release_date(&d)).transpose())
                .transpose()?,
        };

        Ok((changes, self.image))
    }
}

/// Validated, typed values from a game form.
///
/// `None` means the field was not sent. For clearable fields `Some(None)`
/// means it was sent blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    /// Normalized developer name
    pub developer_name: Option<Option<String>>,
    pub platform: Option<PlatformTag>,
    pub base_price: Option<Price>,
    pub discount: Option<Discount>,
    pub stock: Option<i32>,
    pub release_date: Option<Option<NaiveDate>>,
}

impl GameChanges {
    /// Title, platform and base price must be present to create a game
    pub fn ensure_required(&self) -> Result<(), DomainError> {
        if self.title.is_some() && self.platform.is_some() && self.base_price.is_some() {
            Ok(())
        } else {
            Err(missing_required())
        }
    }

    /// Build the draft for a new game
    pub fn into_new_draft(
        self,
        developer_id: Option<i32>,
        image: Option<String>,
    ) -> Result<GameDraft, DomainError> {
        let (Some(title), Some(platform), Some(base_price)) =
            (self.title, self.platform, self.base_price)
        else {
            return Err(missing_required());
        };

        Ok(GameDraft {
            title,
            description: self.description.flatten(),
            developer_id,
            platform,
            base_price,
            discount: self.discount.unwrap_or(Discount::NONE),
            stock: self.stock.unwrap_or(0),
            release_date: self.release_date.flatten(),
            image,
        })
    }

    /// Overlay the sent fields on an existing draft.
    ///
    /// `developer_id` follows the same convention as the clearable fields.
    pub fn apply_to(self, draft: &mut GameDraft, developer_id: Option<Option<i32>>) {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(developer_id) = developer_id {
            draft.developer_id = developer_id;
        }
        if let Some(platform) = self.platform {
            draft.platform = platform;
        }
        if let Some(base_price) = self.base_price {
            draft.base_price = base_price;
        }
        if let Some(discount) = self.discount {
            draft.discount = discount;
        }
        if let Some(stock) = self.stock {
            draft.stock = stock;
        }
        if let Some(release_date) = self.release_date {
            draft.release_date = release_date;
        }
    }
}

fn missing_required() -> DomainError {
    DomainError::ValidationError("Título, plataforma y precio son requeridos".to_string())
}

/// Trimmed value, blank treated as not sent
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trimmed value, blank treated as an explicit clear
fn clearable(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| {
        let trimmed = v.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

fn parse_stock(raw: &str) -> Result<i32, DomainError> {
    raw.parse::<i32>()
        .ok()
        .filter(|stock| *stock >= 0)
        .ok_or_else(|| {
            DomainError::ValidationError(
                "El stock debe ser un número entero mayor o igual a 0".to_string(),
            )
        })
}

fn parse_release_date(raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        DomainError::ValidationError(
            "La fecha de lanzamiento debe tener el formato YYYY-MM-DD".to_string(),
        )
    })
}
