//! Game cover images stored under `<upload_dir>/games/`

use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::Rng;
use tracing::{debug, warn};

use store_core::DomainError;

use crate::services::error::{ServiceError, ServiceResult};

/// Subdirectory of the upload root holding game images
pub const GAMES_SUBDIR: &str = "games";

/// Accepted image types, checked against both extension and MIME subtype
pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["jpeg", "jpg", "png", "webp"];

const REJECTED_TYPE_MESSAGE: &str = "Solo se permiten imágenes (jpeg, jpg, png, webp)";

/// An uploaded file, buffered in memory
#[derive(Clone)]
pub struct ImageUpload {
    /// Filename as sent by the client
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

impl ImageUpload {
    /// Lowercased extension of the client filename
    fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
    }
}

/// Filesystem store for game images
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
    max_bytes: usize,
}

impl ImageStore {
    /// Create a store rooted at `<upload_dir>/games`
    pub fn new(upload_dir: impl AsRef<Path>, max_bytes: usize) -> Self {
        Self {
            dir: upload_dir.as_ref().join(GAMES_SUBDIR),
            max_bytes,
        }
    }

    /// Directory images are written to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Create the image directory if it is missing
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Check type and size of an upload, returning the extension to store it under
    pub fn validate(&self, upload: &ImageUpload) -> Result<String, DomainError> {
        let ext = upload
            .extension()
            .filter(|ext| ALLOWED_IMAGE_TYPES.contains(&ext.as_str()))
            .ok_or_else(|| DomainError::ValidationError(REJECTED_TYPE_MESSAGE.to_string()))?;

        let mime_ok = upload
            .content_type
            .as_deref()
            .and_then(|mime| mime.trim().to_ascii_lowercase().strip_prefix("image/").map(String::from))
            .is_some_and(|subtype| ALLOWED_IMAGE_TYPES.contains(&subtype.as_str()));
        if !mime_ok {
            return Err(DomainError::ValidationError(REJECTED_TYPE_MESSAGE.to_string()));
        }

        if upload.bytes.is_empty() {
            return Err(DomainError::ValidationError("La imagen está vacía".to_string()));
        }
        if upload.bytes.len() > self.max_bytes {
            return Err(DomainError::ValidationError(format!(
                "La imagen no puede superar {} MB",
                self.max_bytes / (1024 * 1024)
            )));
        }

        Ok(ext)
    }

    /// Validate and write an upload, returning the generated filename
    pub async fn save(&self, upload: &ImageUpload) -> ServiceResult<String> {
        let ext = self.validate(upload)?;
        let file_name = generate_file_name(&ext);

        self.ensure_dir()
            .await
            .map_err(|e| ServiceError::storage(format!("cannot create {}: {e}", self.dir.display())))?;
        tokio::fs::write(self.dir.join(&file_name), &upload.bytes)
            .await
            .map_err(|e| ServiceError::storage(format!("cannot write {file_name}: {e}")))?;

        debug!(file = %file_name, size = upload.bytes.len(), "Stored game image");
        Ok(file_name)
    }

    /// Delete a stored image
    pub async fn remove(&self, file_name: &str) -> std::io::Result<()> {
        if !is_plain_file_name(file_name) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("refusing to delete '{file_name}'"),
            ));
        }
        tokio::fs::remove_file(self.dir.join(file_name)).await
    }

    /// Delete a stored image, logging instead of failing
    pub async fn remove_best_effort(&self, file_name: &str) {
        if let Err(e) = self.remove(file_name).await {
            warn!(file = %file_name, error = %e, "Failed to delete game image");
        }
    }
}

/// `game-<unix millis>-<random>.<ext>`
fn generate_file_name(ext: &str) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    format!("game-{}-{suffix}.{ext}", Utc::now().timestamp_millis())
}

/// Stored names are generated, so anything with a path component is foreign
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != ".."
}
