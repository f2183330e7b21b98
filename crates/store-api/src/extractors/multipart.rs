//! Multipart game form extractor

use axum::{
    async_trait,
    extract::{multipart::MultipartError, FromRef, FromRequest, Multipart, Request},
    http::StatusCode,
};
use store_service::dto::GameForm;
use store_service::ImageUpload;
use tracing::debug;

use crate::response::ApiError;
use crate::state::AppState;

/// Form field carrying the cover image
pub const IMAGE_FIELD: &str = "image";

/// The admin game form from a `multipart/form-data` body
#[derive(Debug, Clone)]
pub struct GameMultipart(pub GameForm);

#[async_trait]
impl<S> FromRequest<S> for GameMultipart
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let max_bytes = AppState::from_ref(state)
            .service_context()
            .image_store()
            .max_bytes();
        let too_large = |e: MultipartError| multipart_error(e, max_bytes);

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_body(e.body_text()))?;

        let mut form = GameForm::default();
        while let Some(field) = multipart.next_field().await.map_err(too_large)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == IMAGE_FIELD {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(too_large)?;

                // browsers send an empty part when no file was picked
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                form.image = Some(ImageUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            } else {
                let value = field.text().await.map_err(too_large)?;
                if !form.set_field(&name, value) {
                    debug!(field = %name, "Ignoring unknown game form field");
                }
            }
        }

        Ok(GameMultipart(form))
    }
}

fn multipart_error(err: MultipartError, max_bytes: usize) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::invalid_body(format!(
            "La imagen no puede superar {} MB",
            max_bytes / (1024 * 1024)
        ))
    } else {
        ApiError::invalid_body(err.body_text())
    }
}
