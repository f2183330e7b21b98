//! Catalog query - platform filter, free-text search, sort order and page bounds

use std::str::FromStr;

use super::platform::PlatformFilter;
use crate::error::DomainError;

/// Catalog sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Release date descending, undated games last
    #[default]
    Newest,
    /// Final price ascending
    PriceAsc,
    /// Final price descending
    PriceDesc,
    /// Title ascending, case-insensitive
    Name,
}

impl SortOrder {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Name => "name",
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "newest" => Ok(Self::Newest),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "name" => Ok(Self::Name),
            other => Err(DomainError::InvalidSort(other.to_string())),
        }
    }
}

/// Normalized catalog query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub platform: PlatformFilter,
    /// Trimmed search term, `None` when blank
    pub search: Option<String>,
    pub sort: SortOrder,
    /// Page size, always within `1..=MAX_LIMIT`
    pub limit: i64,
    /// Rows to skip, never negative
    pub offset: i64,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            platform: PlatformFilter::All,
            search: None,
            sort: SortOrder::Newest,
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl CatalogQuery {
    /// Default page size
    pub const DEFAULT_LIMIT: i64 = 50;
    /// Maximum page size
    pub const MAX_LIMIT: i64 = 100;

    pub fn new(
        platform: PlatformFilter,
        search: Option<&str>,
        sort: SortOrder,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Self {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        Self {
            platform,
            search,
            sort,
            limit: limit
                .unwrap_or(Self::DEFAULT_LIMIT)
                .clamp(1, Self::MAX_LIMIT),
            offset: offset.unwrap_or(0).max(0),
        }
    }

    /// ILIKE pattern for the search term with `%`, `_` and `\` matched literally
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().map(|term| {
            let mut pattern = String::with_capacity(term.len() + 2);
            pattern.push('%');
            for c in term.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    pattern.push('\\');
                }
                pattern.push(c);
            }
            pattern.push('%');
            pattern
        })
    }
}
