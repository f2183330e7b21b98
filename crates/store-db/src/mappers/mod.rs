//! Model to entity mappers
//!
//! Rows are converted into domain objects with `From`/`TryFrom`. Conversions
//! that re-validate stored values (platform tag, price, role) are fallible and
//! surface corrupt rows as `DomainError::DatabaseError`.

mod developer;
mod featured;
mod game;
mod reference;
mod user;

pub use game::{discount_to_db, price_to_db};
