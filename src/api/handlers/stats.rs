//! Handlers for statistics endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::{LinkStatsResponse, StatsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns service-wide statistics.
///
/// # Endpoint
///
/// `GET /stats`
///
/// Persisted figures lag the live traffic by up to one flush interval;
/// `pending_visits` reports what is still waiting in memory.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let summary = state.stats_service.summary().await?;

    Ok(Json(StatsResponse {
        summary,
        pending_visits: state.visit_counter.pending_total(),
    }))
}

/// Returns statistics for one short link.
///
/// # Endpoint
///
/// `GET /r/{code}/stats`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn link_stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkStatsResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;
    let short_url = state.link_service.short_url(&link.short_code);
    let pending = state.visit_counter.pending(&link.short_code);

    Ok(Json(LinkStatsResponse::new(link, short_url, pending)))
}
