//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /r/{code}`
///
/// # Request Flow
///
/// 1. Resolve the code through [`crate::application::services::LinkService::lookup`]
/// 2. Record the hit in the in-memory visit tally (no database write)
/// 3. Return 302 Found to the long URL
///
/// Unknown codes redirect to `/` instead of returning an error page.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the lookup fails for any reason other
/// than a missing code.
pub async fn redirect_handler(Path(code): Path<String>, State(state): State<AppState>) -> Response {
    match state.link_service.lookup(&code).await {
        Ok(long_url) => {
            state.visit_counter.record_visit(&code);
            debug!(code = %code, long_url = %long_url, "Redirecting");
            found(&long_url)
        }
        Err(e) if e.is_not_found() => {
            debug!(code = %code, "Unknown short code, redirecting home");
            found("/")
        }
        Err(e) => e.into_response(),
    }
}

/// Redirects `/r` without a code back home.
pub async fn redirect_home_handler() -> Response {
    found("/")
}

/// Fallback for unmatched routes.
///
/// Anything under `/r/` that no route matched (for example `/r/abc/extra`)
/// is treated as an unknown short code and redirected home. Other paths get
/// a JSON 404.
pub async fn fallback_handler(uri: Uri) -> Response {
    if uri.path().starts_with("/r/") {
        debug!(path = %uri.path(), "Unmatched short link path, redirecting home");
        return found("/");
    }

    AppError::not_found("Route not found", json!({ "path": uri.path() })).into_response()
}

fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
