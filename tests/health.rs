mod common;

use axum::http::StatusCode;
use common::{get, harness};
use serde_json::{json, Value};

#[tokio::test]
async fn liveness_is_always_ok() {
    let h = harness();
    h.store.set_available(false);
    let (status, _, body) = get(&h.app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({"status": "ok"}));
}

#[tokio::test]
async fn ready_when_both_dependencies_answer() {
    let h = harness();
    let (status, _, body) = get(&h.app, "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({"status": "ok", "postgres": "ok", "redis": "ok"})
    );
}

#[tokio::test]
async fn degraded_when_store_down() {
    let h = harness();
    h.store.set_available(false);
    let (status, _, body) = get(&h.app, "/health/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({"status": "degraded", "postgres": "error", "redis": "ok"})
    );
}

#[tokio::test]
async fn degraded_when_cache_down() {
    let h = harness();
    h.cache.set_down(true);
    let (status, _, body) = get(&h.app, "/health/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["postgres"], "ok");
    assert_eq!(body["redis"], "error");
}

#[tokio::test]
async fn version_reports_package() {
    let h = harness();
    let (status, _, body) = get(&h.app, "/version").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["name"], "chapel-site");
}
