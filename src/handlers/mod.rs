//! HTTP handlers: gather service results, hand them to the renderer, write the page.

pub mod about;
pub mod health;
pub mod home;
pub mod ministry;

use crate::render::Page;
use crate::state::AppState;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Number of events on the home page.
pub const HOME_EVENT_LIMIT: u32 = 6;

/// Render `page`. On failure the error is logged and the response stays 200 with an empty body.
pub(crate) fn render_page(state: &AppState, page: Page<'_>) -> Response {
    match state.renderer.render(&page) {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(page = page.name(), error = %e, "failed to render page");
            (StatusCode::OK, Html(String::new())).into_response()
        }
    }
}
