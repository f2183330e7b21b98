//! Platform tag - the console/PC family a game is sold for

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Platform a game runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformTag {
    Ps5,
    Xbox,
    Pc,
    Switch,
}

impl PlatformTag {
    /// All known platforms, in storefront display order
    pub const ALL: [PlatformTag; 4] = [Self::Ps5, Self::Xbox, Self::Pc, Self::Switch];

    /// Database/wire representation
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ps5 => "ps5",
            Self::Xbox => "xbox",
            Self::Pc => "pc",
            Self::Switch => "switch",
        }
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ps5" => Ok(Self::Ps5),
            "xbox" => Ok(Self::Xbox),
            "pc" => Ok(Self::Pc),
            "switch" => Ok(Self::Switch),
            other => Err(DomainError::InvalidPlatform(other.to_string())),
        }
    }
}

/// Platform filter for catalog queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformFilter {
    #[default]
    All,
    Only(PlatformTag),
}

impl PlatformFilter {
    /// The platform to filter on, or `None` for all platforms
    #[inline]
    pub fn tag(&self) -> Option<PlatformTag> {
        match self {
            Self::All => None,
            Self::Only(tag) => Some(*tag),
        }
    }

    /// Check whether a game on `platform` passes this filter
    pub fn matches(&self, platform: PlatformTag) -> bool {
        self.tag().map_or(true, |tag| tag == platform)
    }
}

impl FromStr for PlatformFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed.parse().map(Self::Only)
    }
}
