//! Staff members and their fixed display categories.

use super::{base::soft_deletable, text_column_enum, Record, SoftDeleteModel, UnknownVariant};
use crate::sql::SqlValue;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

/// Display groups for the staff page. Declaration order is display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffCategory {
    Pastor,
    Staff,
}

impl StaffCategory {
    pub const ALL: [StaffCategory; 2] = [StaffCategory::Pastor, StaffCategory::Staff];

    pub fn as_str(self) -> &'static str {
        match self {
            StaffCategory::Pastor => "pastor",
            StaffCategory::Staff => "staff",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StaffCategory::Pastor => "Teaching Elders",
            StaffCategory::Staff => "Staff",
        }
    }
}

impl FromStr for StaffCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pastor" => Ok(StaffCategory::Pastor),
            "staff" => Ok(StaffCategory::Staff),
            other => Err(UnknownVariant {
                kind: "staff category",
                value: other.to_string(),
            }),
        }
    }
}

text_column_enum!(StaffCategory);

#[derive(Clone, Debug, PartialEq, sqlx::FromRow, Serialize)]
pub struct StaffMember {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub base: SoftDeleteModel,
    pub user_id: Option<i64>,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub photo_url: String,
    pub display_order: i32,
    pub is_active: bool,
    pub category: StaffCategory,
}

soft_deletable!(StaffMember);

impl StaffMember {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        title: impl Into<String>,
        category: StaffCategory,
        display_order: i32,
        now: DateTime<Utc>,
    ) -> Self {
        StaffMember {
            base: SoftDeleteModel::new(id, now),
            user_id: None,
            name: name.into(),
            title: title.into(),
            bio: String::new(),
            email: String::new(),
            phone: String::new(),
            photo_url: String::new(),
            display_order,
            is_active: true,
            category,
        }
    }
}

impl Record for StaffMember {
    const TABLE: &'static str = "staff_members";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_at",
        "updated_at",
        "deleted_at",
        "user_id",
        "name",
        "title",
        "bio",
        "email",
        "phone",
        "photo_url",
        "display_order",
        "is_active",
        "category",
    ];
    const SOFT_DELETE: bool = true;

    fn column(&self, name: &str) -> SqlValue {
        if let Some(v) = self.base.column(name) {
            return v;
        }
        match name {
            "user_id" => self.user_id.into(),
            "name" => self.name.clone().into(),
            "title" => self.title.clone().into(),
            "bio" => self.bio.clone().into(),
            "email" => self.email.clone().into(),
            "phone" => self.phone.clone().into(),
            "photo_url" => self.photo_url.clone().into(),
            "display_order" => self.display_order.into(),
            "is_active" => self.is_active.into(),
            "category" => self.category.as_str().into(),
            _ => SqlValue::Null,
        }
    }
}
