//! Auth gate
//!
//! Lets public catalog reads and the auth endpoints through and requires a
//! valid bearer token for everything else under `/api`.

use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::extractors::AuthUser;
use crate::response::ApiError;
use crate::state::AppState;

/// Prefix guarded by the gate
pub const API_PREFIX: &str = "/api";

/// Reachable with any method and no token
const OPEN_PREFIXES: [&str; 1] = ["/api/auth"];

/// Readable without a token
const PUBLIC_READ_PREFIXES: [&str; 5] = [
    "/api/games",
    "/api/developers",
    "/api/platforms",
    "/api/categories",
    "/api/featured",
];

/// `path` is `prefix` itself or a path below it
fn is_under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Whether a request may skip the token check
pub fn is_public_route(method: &Method, path: &str) -> bool {
    if !is_under(path, API_PREFIX) {
        return true;
    }
    if OPEN_PREFIXES.iter().any(|prefix| is_under(path, prefix)) {
        return true;
    }
    let is_read = method == Method::GET || method == Method::HEAD;
    is_read && PUBLIC_READ_PREFIXES.iter().any(|prefix| is_under(path, prefix))
}

/// Reject unauthenticated requests to protected routes before they reach a handler
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if is_public_route(request.method(), request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let user = AuthUser::from_headers(request.headers(), state.jwt_service()).map_err(|e| {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            reason = e.error_code(),
            "Rejected unauthenticated request"
        );
        e
    })?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
