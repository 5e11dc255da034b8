//! Entity bases: soft-deletable records embed `SoftDeleteModel`; plain records do not.

use crate::sql::SqlValue;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DELETED_AT: &str = "deleted_at";

/// Identity, timestamps and deletion marker shared by soft-deletable records.
#[derive(Clone, Debug, PartialEq, sqlx::FromRow, Serialize)]
pub struct SoftDeleteModel {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl SoftDeleteModel {
    pub const COLUMNS: [&'static str; 4] = ["id", "created_at", "updated_at", DELETED_AT];

    /// New live record stamped at `now`.
    pub fn new(id: i64, now: DateTime<Utc>) -> Self {
        SoftDeleteModel {
            id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn column(&self, name: &str) -> Option<SqlValue> {
        Some(match name {
            "id" => self.id.into(),
            "created_at" => self.created_at.into(),
            "updated_at" => self.updated_at.into(),
            DELETED_AT => self.deleted_at.into(),
            _ => return None,
        })
    }
}

pub trait SoftDeletable {
    fn base(&self) -> &SoftDeleteModel;

    fn base_mut(&mut self) -> &mut SoftDeleteModel;

    fn soft_delete(&mut self, at: DateTime<Utc>) {
        let base = self.base_mut();
        base.deleted_at = Some(at);
        base.updated_at = at;
    }
}

macro_rules! soft_deletable {
    ($ty:ty) => {
        impl $crate::model::SoftDeletable for $ty {
            fn base(&self) -> &$crate::model::SoftDeleteModel {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::model::SoftDeleteModel {
                &mut self.base
            }
        }
    };
}

pub(crate) use soft_deletable;
