mod common;

use axum_test::TestServer;
use shorty::routes::router;

#[tokio::test]
async fn test_health_endpoint_success() {
    let pool = common::test_pool().await;
    let state = common::create_test_state(pool);
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["visit_counter"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_degraded_when_pool_closed() {
    let pool = common::test_pool().await;
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(router(state)).unwrap();

    pool.close().await;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
    assert!(json.get("version").is_some());
}
