//! SQLite implementation of statistics repository.

use async_trait::async_trait;
use chrono::{Days, NaiveDate, NaiveTime};
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::StatsRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::TIMESTAMP_FORMAT;

/// SQLite repository for aggregate queries over `url_mapping`.
pub struct SqliteStatsRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for SqliteStatsRepository {
    async fn count_links(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url_mapping")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn total_visits(&self) -> Result<i64, AppError> {
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(visit_count), 0) FROM url_mapping")
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(total)
    }

    async fn visits_on_links_created_on(&self, date: NaiveDate) -> Result<i64, AppError> {
        let next_day = date.checked_add_days(Days::new(1)).ok_or_else(|| {
            AppError::bad_request("Date out of range", json!({ "date": date.to_string() }))
        })?;
        let start = date.and_time(NaiveTime::MIN).format(TIMESTAMP_FORMAT);
        let end = next_day.and_time(NaiveTime::MIN).format(TIMESTAMP_FORMAT);

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(visit_count), 0)
            FROM url_mapping
            WHERE created_at >= ? AND created_at < ?
            "#,
        )
        .bind(start.to_string())
        .bind(end.to_string())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(total)
    }

    async fn most_visited(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT short_code, long_url, visit_count, created_at
            FROM url_mapping
            ORDER BY visit_count DESC, rowid ASC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn most_recent(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT short_code, long_url, visit_count, created_at
            FROM url_mapping
            ORDER BY created_at DESC, rowid DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }
}
