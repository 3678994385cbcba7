//! Route table.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    create_handler, fallback_handler, health_handler, link_stats_handler, redirect_handler,
    redirect_home_handler, stats_handler,
};
use crate::state::AppState;

/// All service routes without global middleware.
///
/// # Endpoints
///
/// - `POST /create`          - Shorten a URL (form body)
/// - `GET  /r`               - No code given, redirect home
/// - `GET  /r/{code}`        - Redirect to the long URL
/// - `GET  /r/{code}/stats`  - Statistics for one link
/// - `GET  /stats`           - Service-wide statistics
/// - `GET  /health`          - Database and visit counter status
///
/// Unmatched paths under `/r/` redirect home; anything else is a JSON 404.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_handler))
        .route("/r", get(redirect_home_handler))
        .route("/r/{code}", get(redirect_handler))
        .route("/r/{code}/stats", get(link_stats_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .fallback(fallback_handler)
}
