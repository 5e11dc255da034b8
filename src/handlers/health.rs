//! Liveness and readiness. Readiness probes the record store and the cache independently.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthBody {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct ReadyBody {
    pub status: &'static str,
    pub postgres: &'static str,
    pub redis: &'static str,
}

pub async fn liveness() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    let (store, cache) = tokio::join!(state.store.ping(), state.cache.ping());
    if let Err(e) = &store {
        tracing::warn!(error = %e, "readiness: postgres unavailable");
    }
    if let Err(e) = &cache {
        tracing::warn!(error = %e, "readiness: redis unavailable");
    }
    let label = |ok: bool| if ok { "ok" } else { "error" };
    let healthy = store.is_ok() && cache.is_ok();
    let body = ReadyBody {
        status: if healthy { "ok" } else { "degraded" },
        postgres: label(store.is_ok()),
        redis: label(cache.is_ok()),
    };
    let code = if healthy { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (code, Json(body))
}
