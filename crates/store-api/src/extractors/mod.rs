//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, catalog queries and
//! the multipart game form.

mod auth;
mod catalog;
mod multipart;
mod path;
mod validated;

pub use auth::AuthUser;
pub use catalog::CatalogQueryParams;
pub use multipart::{GameMultipart, IMAGE_FIELD};
pub use path::IdPath;
pub use validated::{JsonBody, ValidatedJson};
