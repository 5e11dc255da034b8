//! Ministries. `slug` is the stable public identifier, unique in the store.

use super::{base::soft_deletable, Record, SoftDeleteModel};
use crate::sql::SqlValue;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, sqlx::FromRow, Serialize)]
pub struct Ministry {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub base: SoftDeleteModel,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub leader_id: Option<i64>,
    pub contact_email: String,
    /// Free text, e.g. "Sundays, 9:15 AM".
    pub meeting_time: String,
    pub location: String,
    pub is_active: bool,
    /// Lower sorts first.
    pub sort_order: i32,
    /// Trusted rich text for the detail page.
    pub page_content: String,
}

soft_deletable!(Ministry);

impl Ministry {
    pub fn new(id: i64, name: impl Into<String>, slug: impl Into<String>, sort_order: i32, now: DateTime<Utc>) -> Self {
        Ministry {
            base: SoftDeleteModel::new(id, now),
            name: name.into(),
            slug: slug.into(),
            description: String::new(),
            leader_id: None,
            contact_email: String::new(),
            meeting_time: String::new(),
            location: String::new(),
            is_active: true,
            sort_order,
            page_content: String::new(),
        }
    }
}

impl Record for Ministry {
    const TABLE: &'static str = "ministries";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_at",
        "updated_at",
        "deleted_at",
        "name",
        "slug",
        "description",
        "leader_id",
        "contact_email",
        "meeting_time",
        "location",
        "is_active",
        "sort_order",
        "page_content",
    ];
    const SOFT_DELETE: bool = true;

    fn column(&self, name: &str) -> SqlValue {
        if let Some(v) = self.base.column(name) {
            return v;
        }
        match name {
            "name" => self.name.clone().into(),
            "slug" => self.slug.clone().into(),
            "description" => self.description.clone().into(),
            "leader_id" => self.leader_id.into(),
            "contact_email" => self.contact_email.clone().into(),
            "meeting_time" => self.meeting_time.clone().into(),
            "location" => self.location.clone().into(),
            "is_active" => self.is_active.into(),
            "sort_order" => self.sort_order.into(),
            "page_content" => self.page_content.clone().into(),
            _ => SqlValue::Null,
        }
    }
}
