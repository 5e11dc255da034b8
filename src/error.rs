//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Connection or transport failure talking to the record store.
    #[error("store unavailable: {0}")]
    Store(#[from] sqlx::Error),
    /// No matching (active, non-deleted) record.
    #[error("{0}")]
    NotFound(String),
    #[error("render: {0}")]
    Render(String),
    #[error("migration: {0}")]
    Migration(String),
    #[error("cache: {0}")]
    Cache(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_message_and_status() {
        let resp = AppError::NotFound("Ministry not found".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_failure_is_generic_server_error() {
        let resp = AppError::Store(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn only_not_found_reports_not_found() {
        assert!(AppError::NotFound("x".into()).is_not_found());
        assert!(!AppError::Render("boom".into()).is_not_found());
    }
}
