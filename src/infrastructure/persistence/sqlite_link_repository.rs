//! SQLite implementation of link repository.

use async_trait::async_trait;
use chrono::SubsecRound;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::TIMESTAMP_FORMAT;

/// SQLite repository for the `url_mapping` table.
///
/// All statements use bound parameters; none span a transaction.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let created_at = new_link.created_at.trunc_subsecs(0);

        sqlx::query(
            r#"
            INSERT INTO url_mapping (short_code, long_url, visit_count, created_at)
            VALUES (?, ?, 0, ?)
            "#,
        )
        .bind(&new_link.short_code)
        .bind(&new_link.long_url)
        .bind(created_at.format(TIMESTAMP_FORMAT).to_string())
        .execute(self.pool.as_ref())
        .await?;

        Ok(Link::new(
            new_link.short_code,
            new_link.long_url,
            0,
            created_at,
        ))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT short_code, long_url, visit_count, created_at
            FROM url_mapping
            WHERE short_code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT short_code, long_url, visit_count, created_at
            FROM url_mapping
            WHERE long_url = ?
            ORDER BY rowid ASC
            LIMIT 1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM url_mapping WHERE short_code = ?)",
        )
        .bind(code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn add_visits(&self, code: &str, visits: u64) -> Result<u64, AppError> {
        let visits = i64::try_from(visits).unwrap_or(i64::MAX);

        let result =
            sqlx::query("UPDATE url_mapping SET visit_count = visit_count + ? WHERE short_code = ?")
                .bind(visits)
                .bind(code)
                .execute(self.pool.as_ref())
                .await?;

        Ok(result.rows_affected())
    }
}
