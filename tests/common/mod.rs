#![allow(dead_code)]

use shorty::config::Config;
use shorty::infrastructure::persistence;
use shorty::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

pub const TEST_CHARSET: &str = "abc123";
pub const TEST_CODE_LENGTH: usize = 4;

/// Fresh in-memory database with the schema applied.
///
/// A single connection that never expires keeps the database alive for the
/// whole test.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    persistence::migrate(&pool).await.unwrap();
    pool
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        base_url: "http://s.test".to_string(),
        short_code_length: TEST_CODE_LENGTH,
        short_code_charset: TEST_CHARSET.to_string(),
        ..Config::default()
    }
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool), &test_config()).unwrap()
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO url_mapping (short_code, long_url) VALUES (?, ?)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_link_at(pool: &SqlitePool, code: &str, url: &str, visits: i64, created_at: &str) {
    sqlx::query(
        "INSERT INTO url_mapping (short_code, long_url, visit_count, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(code)
    .bind(url)
    .bind(visits)
    .bind(created_at)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn visit_count(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT visit_count FROM url_mapping WHERE short_code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn row_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url_mapping")
        .fetch_one(pool)
        .await
        .unwrap()
}
