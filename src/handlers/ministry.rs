//! Ministries overview and detail pages.

use super::render_page;
use crate::error::AppError;
use crate::render::Page;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::Response,
};

pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let ministries = state
        .ministries
        .get_active()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "failed to load ministries"))?;
    Ok(render_page(&state, Page::MinistriesIndex { ministries: &ministries }))
}

pub async fn show(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Response, AppError> {
    let ministry = state.ministries.get_by_slug(&slug).await.inspect_err(|e| {
        if !e.is_not_found() {
            tracing::error!(slug = %slug, error = %e, "failed to load ministry");
        }
    })?;
    Ok(render_page(&state, Page::MinistryShow { ministry: &ministry }))
}
