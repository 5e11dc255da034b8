//! Key/value site settings. No soft delete: rows are overwritten or removed in place.

use super::Record;
use crate::sql::SqlValue;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, sqlx::FromRow, Serialize)]
pub struct SiteSetting {
    pub key: String,
    pub value: String,
    pub description: String,
    pub updated_by: Option<i64>,
    pub updated_at: DateTime<Utc>,
}

impl SiteSetting {
    pub fn new(key: impl Into<String>, value: impl Into<String>, now: DateTime<Utc>) -> Self {
        SiteSetting {
            key: key.into(),
            value: value.into(),
            description: String::new(),
            updated_by: None,
            updated_at: now,
        }
    }
}

impl Record for SiteSetting {
    const TABLE: &'static str = "site_settings";
    const COLUMNS: &'static [&'static str] = &["key", "value", "description", "updated_by", "updated_at"];
    const SOFT_DELETE: bool = false;

    fn column(&self, name: &str) -> SqlValue {
        match name {
            "key" => self.key.clone().into(),
            "value" => self.value.clone().into(),
            "description" => self.description.clone().into(),
            "updated_by" => self.updated_by.into(),
            "updated_at" => self.updated_at.into(),
            _ => SqlValue::Null,
        }
    }
}
