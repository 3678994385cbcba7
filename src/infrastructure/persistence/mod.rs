//! SQLite repository implementations and pool setup.
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - Mapping lookups, inserts and visit updates
//! - [`SqliteStatsRepository`] - Aggregate statistics queries
//!
//! The schema lives in `migrations/` and is embedded into the binary through
//! [`MIGRATOR`].

pub mod sqlite_link_repository;
pub mod sqlite_stats_repository;

pub use sqlite_link_repository::SqliteLinkRepository;
pub use sqlite_stats_repository::SqliteStatsRepository;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::config::Config;

/// Storage format of `url_mapping.created_at`, identical to SQLite's
/// `CURRENT_TIMESTAMP` so rows written by the column default and by inserts
/// sort and compare as plain text.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens the connection pool described by `config`, creating the database
/// file if it does not exist.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the database cannot be opened.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_with(options)
        .await
}

/// Applies pending migrations.
///
/// # Errors
///
/// Returns an error if a migration fails or the applied history diverges.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
