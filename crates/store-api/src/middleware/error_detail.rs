//! Development-only rendering of raw server error details
//!
//! `ApiError` stashes the full body of a server error in the response
//! extensions. This layer swaps it in so the client sees the `error` field.

use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use store_common::ErrorResponse;

/// Replace the public error body with the stashed detailed one
pub async fn render_error_detail(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let Some(detailed) = response.extensions_mut().remove::<ErrorResponse>() else {
        return response;
    };

    match serde_json::to_vec(&detailed) {
        Ok(bytes) => {
            let headers = response.headers_mut();
            headers.remove(header::CONTENT_LENGTH);
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
            *response.body_mut() = Body::from(bytes);
        }
        Err(e) => tracing::warn!(error = %e, "Failed to render error detail"),
    }

    response
}
