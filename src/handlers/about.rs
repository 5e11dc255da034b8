//! About section: settings-driven pages plus pastors and staff.

use super::render_page;
use crate::error::AppError;
use crate::render::{AboutSection, Page};
use crate::service::group_by_category;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// `/about` has no page of its own.
pub async fn index() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, AboutSection::History.path())])
}

async fn section(state: AppState, section: AboutSection) -> Result<Response, AppError> {
    let settings = state
        .site_settings
        .get_all()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "failed to load site settings"))?;
    Ok(render_page(&state, Page::About { section, settings: &settings }))
}

pub async fn history(State(state): State<AppState>) -> Result<Response, AppError> {
    section(state, AboutSection::History).await
}

pub async fn beliefs(State(state): State<AppState>) -> Result<Response, AppError> {
    section(state, AboutSection::Beliefs).await
}

pub async fn worship(State(state): State<AppState>) -> Result<Response, AppError> {
    section(state, AboutSection::Worship).await
}

pub async fn gospel(State(state): State<AppState>) -> Result<Response, AppError> {
    section(state, AboutSection::Gospel).await
}

pub async fn building(State(state): State<AppState>) -> Result<Response, AppError> {
    section(state, AboutSection::Building).await
}

pub async fn staff(State(state): State<AppState>) -> Result<Response, AppError> {
    let settings = state
        .site_settings
        .get_all()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "failed to load site settings"))?;
    let members = state
        .staff_members
        .get_active()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "failed to load staff members"))?;
    let groups = group_by_category(members);
    Ok(render_page(&state, Page::Staff { settings: &settings, groups: &groups }))
}
