//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod developers;
pub mod featured;
pub mod games;
pub mod health;
pub mod reference;
pub mod root;
