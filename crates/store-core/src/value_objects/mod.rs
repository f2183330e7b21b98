//! Value objects - immutable types that represent domain concepts

mod catalog;
mod platform;
mod pricing;

pub use catalog::{CatalogQuery, SortOrder};
pub use platform::{PlatformFilter, PlatformTag};
pub use pricing::{final_price, Discount, Price};
