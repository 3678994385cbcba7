//! Repository trait for aggregate statistics.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Read-only aggregate queries over the mapping table.
///
/// All counts reflect persisted visit counts only.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteStatsRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Counts all stored mappings.
    async fn count_links(&self) -> Result<i64, AppError>;

    /// Sums the visit counts of all mappings. Returns `0` for an empty table.
    async fn total_visits(&self) -> Result<i64, AppError>;

    /// Sums the visit counts of mappings created on `date` (UTC).
    async fn visits_on_links_created_on(&self, date: NaiveDate) -> Result<i64, AppError>;

    /// Returns up to `limit` mappings ordered by visit count, highest first.
    async fn most_visited(&self, limit: i64) -> Result<Vec<Link>, AppError>;

    /// Returns up to `limit` mappings ordered by creation time, newest first.
    async fn most_recent(&self, limit: i64) -> Result<Vec<Link>, AppError>;
}
