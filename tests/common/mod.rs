#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chapel_site::{
    error::AppError,
    render::{Page, Renderer},
    store::seed,
    AppState, CacheProbe, MaudRenderer, MemoryStore,
};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

#[derive(Default)]
pub struct StubCache {
    down: AtomicBool,
}

impl StubCache {
    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }
}

#[async_trait]
impl CacheProbe for StubCache {
    async fn ping(&self) -> Result<(), AppError> {
        if self.down.load(Ordering::SeqCst) {
            Err(AppError::Cache("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

pub struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render(&self, page: &Page<'_>) -> Result<String, AppError> {
        Err(AppError::Render(format!("template missing for {}", page.name())))
    }
}

pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub cache: Arc<StubCache>,
    pub app: Router,
}

pub fn seeded_store(now: DateTime<Utc>) -> Arc<MemoryStore> {
    Arc::new(seed::memory_store(now).expect("seed data is consistent"))
}

pub fn harness_with(store: Arc<MemoryStore>, renderer: Arc<dyn Renderer>) -> Harness {
    let cache = Arc::new(StubCache::default());
    let state = AppState::new(store.clone(), cache.clone(), renderer);
    Harness {
        store,
        cache,
        app: chapel_site::app(state, "static"),
    }
}

pub fn harness() -> Harness {
    harness_with(seeded_store(Utc::now()), Arc::new(MaudRenderer::new("http://localhost:3000")))
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}
