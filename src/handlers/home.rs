//! Home page: service times and upcoming events.

use super::{render_page, HOME_EVENT_LIMIT};
use crate::error::AppError;
use crate::render::Page;
use crate::state::AppState;
use axum::{extract::State, response::Response};
use chrono::Utc;

pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let settings = state
        .site_settings
        .get_all()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "failed to load site settings"))?;
    let events = state
        .events
        .get_upcoming(HOME_EVENT_LIMIT)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "failed to load upcoming events"))?;
    let page = Page::Home {
        settings: &settings,
        events: &events,
        now: Utc::now(),
    };
    Ok(render_page(&state, page))
}
