//! Public site pages.

use crate::handlers::{about, home, ministry};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/about", get(about::index))
        .route("/about/history", get(about::history))
        .route("/about/beliefs", get(about::beliefs))
        .route("/about/worship", get(about::worship))
        .route("/about/gospel", get(about::gospel))
        .route("/about/staff", get(about::staff))
        .route("/about/building", get(about::building))
        .route("/ministries", get(ministry::index))
        .route("/ministries/:slug", get(ministry::show))
}
