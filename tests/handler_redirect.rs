mod common;

use axum_test::TestServer;
use shorty::routes::router;

#[tokio::test]
async fn test_redirect_success() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "abc1", "https://example.com/target").await;
    let state = common::create_test_state(pool);
    let server = TestServer::new(router(state.clone())).unwrap();

    let response = server.get("/r/abc1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
    assert_eq!(state.visit_counter.pending("abc1"), 1);
}

#[tokio::test]
async fn test_redirect_does_not_write_visits() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "abc1", "https://example.com").await;
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(router(state)).unwrap();

    server.get("/r/abc1").await;
    server.get("/r/abc1").await;

    assert_eq!(common::visit_count(&pool, "abc1").await, 0);
}

#[tokio::test]
async fn test_redirect_unknown_code_goes_home() {
    let pool = common::test_pool().await;
    let state = common::create_test_state(pool);
    let server = TestServer::new(router(state.clone())).unwrap();

    let response = server.get("/r/zzzz").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "/");
    assert_eq!(state.visit_counter.pending_total(), 0);
}

#[tokio::test]
async fn test_redirect_without_code_goes_home() {
    let pool = common::test_pool().await;
    let state = common::create_test_state(pool);
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/r").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "/");
}

#[tokio::test]
async fn test_redirect_extra_segments_go_home() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "abc1", "https://example.com").await;
    let state = common::create_test_state(pool);
    let server = TestServer::new(router(state.clone())).unwrap();

    let response = server.get("/r/abc1/extra").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "/");
    assert_eq!(state.visit_counter.pending_total(), 0);

    let response = server.get("/r/abc1/extra/deeper").await;
    assert_eq!(response.header("location"), "/");
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let pool = common::test_pool().await;
    let state = common::create_test_state(pool);
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/nowhere").await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<serde_json::Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_visits_reach_database_after_flush() {
    let pool = common::test_pool().await;
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(router(state.clone())).unwrap();

    let created = server
        .post("/create")
        .form(&[("url", "https://example.com/counted")])
        .await
        .json::<serde_json::Value>();
    let code = created["code"].as_str().unwrap().to_string();

    for _ in 0..3 {
        let response = server.get(&format!("/r/{code}")).await;
        assert_eq!(response.status_code(), 302);
    }
    assert_eq!(state.visit_counter.pending(&code), 3);

    let report = state.visit_counter.flush().await;

    assert_eq!(report.flushed_codes, 1);
    assert_eq!(report.flushed_visits, 3);
    assert_eq!(common::visit_count(&pool, &code).await, 3);
    assert_eq!(state.visit_counter.pending(&code), 0);

    let report = state.visit_counter.flush().await;
    assert!(report.is_empty());
    assert_eq!(common::visit_count(&pool, &code).await, 3);
}
