//! Welcome page

use axum::Json;
use store_service::WelcomeResponse;

/// Service banner with the endpoint index
///
/// GET /
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::new(env!("CARGO_PKG_VERSION")))
}
