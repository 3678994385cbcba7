//! Service-wide statistics.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::domain::entities::Link;
use crate::domain::repositories::StatsRepository;
use crate::error::AppError;

/// Number of links in each ranked list of [`StatsSummary`].
pub const TOP_LINKS: i64 = 10;

/// Service-wide statistics.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    pub total_links: i64,
    pub total_visits: i64,
    /// Persisted visits on links that were created today (UTC).
    pub visits_on_links_created_today: i64,
    pub most_visited: Vec<Link>,
    pub recent: Vec<Link>,
}

/// Service for reading aggregate statistics.
///
/// Figures come from the store only; visits still pending in the in-memory
/// tally show up after the next flush.
pub struct StatsService<R: StatsRepository> {
    repository: Arc<R>,
}

impl<R: StatsRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Collects the service-wide summary.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn summary(&self) -> Result<StatsSummary, AppError> {
        let today = Utc::now().date_naive();

        Ok(StatsSummary {
            total_links: self.repository.count_links().await?,
            total_visits: self.repository.total_visits().await?,
            visits_on_links_created_today: self
                .repository
                .visits_on_links_created_on(today)
                .await?,
            most_visited: self.repository.most_visited(TOP_LINKS).await?,
            recent: self.repository.most_recent(TOP_LINKS).await?,
        })
    }
}
