//! Developer entity - the studio behind a game

use chrono::{DateTime, Utc};

/// Developer entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Developer {
    pub id: i32,
    pub name: String,
    pub country: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Canonical form of a developer name as typed into the admin form.
///
/// Surrounding whitespace is dropped and inner runs of whitespace collapse to
/// one space. Returns `None` for a blank name.
pub fn normalize_developer_name(raw: &str) -> Option<String> {
    let name = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    (!name.is_empty()).then_some(name)
}
