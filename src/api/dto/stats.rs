//! DTOs for statistics endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::StatsSummary;
use crate::domain::entities::Link;

/// Statistics for a single short link.
#[derive(Debug, Serialize)]
pub struct LinkStatsResponse {
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
    /// Persisted visit count.
    pub visit_count: i64,
    /// Visits recorded since the last flush.
    pub pending_visits: u64,
    pub created_at: DateTime<Utc>,
    pub created_at_display: String,
}

impl LinkStatsResponse {
    pub fn new(link: Link, short_url: String, pending_visits: u64) -> Self {
        Self {
            created_at_display: link.formatted_created_at(),
            short_code: link.short_code,
            short_url,
            long_url: link.long_url,
            visit_count: link.visit_count,
            pending_visits,
            created_at: link.created_at,
        }
    }
}

/// Service-wide statistics plus the size of the unflushed tally.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub summary: StatsSummary,
    pub pending_visits: u64,
}
