mod common;

use shorty::domain::entities::NewLink;
use shorty::domain::repositories::LinkRepository;
use shorty::error::AppError;
use shorty::infrastructure::persistence::SqliteLinkRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_create_link() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool.clone()));

    let link = repo
        .create(NewLink::now("abc1".to_string(), "https://example.com".to_string()))
        .await
        .unwrap();

    assert_eq!(link.short_code, "abc1");
    assert_eq!(link.long_url, "https://example.com");
    assert_eq!(link.visit_count, 0);
    assert_eq!(common::row_count(&pool).await, 1);
}

#[tokio::test]
async fn test_create_duplicate_code_conflicts() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    repo.create(NewLink::now("abc1".to_string(), "https://a.com".to_string()))
        .await
        .unwrap();
    let result = repo
        .create(NewLink::now("abc1".to_string(), "https://b.com".to_string()))
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[tokio::test]
async fn test_find_by_code() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let created = repo
        .create(NewLink::now("abc1".to_string(), "https://example.com".to_string()))
        .await
        .unwrap();
    let found = repo.find_by_code("abc1").await.unwrap().unwrap();

    assert_eq!(found.short_code, "abc1");
    assert_eq!(found.long_url, "https://example.com");
    assert_eq!(found.created_at, created.created_at);
}

#[tokio::test]
async fn test_create_stores_column_default_timestamp_format() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool.clone()));

    let link = repo
        .create(NewLink::now("abc1".to_string(), "https://example.com".to_string()))
        .await
        .unwrap();
    common::create_test_link(&pool, "def2", "https://default.com").await;

    let stored: Vec<String> = sqlx::query_scalar("SELECT created_at FROM url_mapping ORDER BY rowid")
        .fetch_all(&pool)
        .await
        .unwrap();

    assert_eq!(stored[0], link.formatted_created_at());
    for value in &stored {
        assert_eq!(value.len(), "YYYY-MM-DD HH:MM:SS".len());
        assert!(!value.contains('T'), "unexpected format: {value}");
    }
}

#[tokio::test]
async fn test_find_by_code_not_found() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    assert!(repo.find_by_code("nope").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_code_reads_column_default_timestamp() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "old1", "https://legacy.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_code("old1").await.unwrap().unwrap();

    assert_eq!(link.long_url, "https://legacy.com");
    assert_eq!(link.visit_count, 0);
}

#[tokio::test]
async fn test_find_by_long_url_returns_first_inserted() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "aaa1", "https://dup.com").await;
    common::create_test_link(&pool, "bbb2", "https://dup.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_long_url("https://dup.com").await.unwrap().unwrap();

    assert_eq!(link.short_code, "aaa1");
}

#[tokio::test]
async fn test_find_by_long_url_not_found() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    assert!(
        repo.find_by_long_url("https://never.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_exists() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "abc1", "https://example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    assert!(repo.exists("abc1").await.unwrap());
    assert!(!repo.exists("abc2").await.unwrap());
}

#[tokio::test]
async fn test_add_visits_is_additive() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "abc1", "https://example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool.clone()));

    assert_eq!(repo.add_visits("abc1", 5).await.unwrap(), 1);
    assert_eq!(repo.add_visits("abc1", 2).await.unwrap(), 1);

    assert_eq!(common::visit_count(&pool, "abc1").await, 7);
}

#[tokio::test]
async fn test_add_visits_unknown_code_affects_nothing() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    assert_eq!(repo.add_visits("gone", 3).await.unwrap(), 0);
}
