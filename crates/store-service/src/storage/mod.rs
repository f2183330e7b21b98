//! Image storage on the local filesystem

mod image_store;

pub use image_store::{ImageStore, ImageUpload, ALLOWED_IMAGE_TYPES, GAMES_SUBDIR};
