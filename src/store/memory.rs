//! In-process `RecordStore`. Evaluates `Select` descriptors with the same semantics
//! PostgreSQL applies to the generated SQL.

use super::RecordStore;
use crate::error::AppError;
use crate::model::{Event, Ministry, Record, SiteSetting, StaffMember};
use crate::sql::{Direction, Select};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::RwLock;

/// Filter, sort and truncate `rows` as `select` describes.
pub fn evaluate<R: Record>(rows: &[R], select: &Select) -> Vec<R> {
    let conditions = select.effective_conditions();
    let mut out: Vec<R> = rows
        .iter()
        .filter(|row| {
            let column = |name: &str| row.column(name);
            conditions.iter().all(|c| c.matches(&column))
        })
        .cloned()
        .collect();
    // Stable sort: rows equal on every key keep insertion order.
    out.sort_by(|a, b| {
        for (col, dir) in &select.order {
            let ord = a.column(col).sort_cmp(&b.column(col));
            let ord = match dir {
                Direction::Asc => ord,
                Direction::Desc => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });
    if let Some(n) = select.limit {
        out.truncate(n as usize);
    }
    out
}

#[derive(Default)]
pub struct MemoryStore {
    events: RwLock<Vec<Event>>,
    ministries: RwLock<Vec<Ministry>>,
    staff_members: RwLock<Vec<StaffMember>>,
    site_settings: RwLock<Vec<SiteSetting>>,
    unavailable: AtomicBool,
}

fn read_all<R: Record>(rows: &RwLock<Vec<R>>, select: &Select) -> Vec<R> {
    let guard = rows.read().unwrap_or_else(|poisoned| poisoned.into_inner());
    evaluate(&guard, select)
}

fn push<R>(rows: &RwLock<Vec<R>>, row: R) {
    rows.write().unwrap_or_else(|poisoned| poisoned.into_inner()).push(row);
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_event(&self, event: Event) {
        push(&self.events, event);
    }

    /// Rejects a duplicate slug, like the unique index does.
    pub fn insert_ministry(&self, ministry: Ministry) -> Result<(), AppError> {
        let mut rows = self.ministries.write().unwrap_or_else(|p| p.into_inner());
        if rows.iter().any(|m| m.slug == ministry.slug) {
            return Err(AppError::Store(sqlx::Error::Protocol(format!(
                "duplicate ministry slug: {}",
                ministry.slug
            ))));
        }
        rows.push(ministry);
        Ok(())
    }

    pub fn insert_staff_member(&self, member: StaffMember) {
        push(&self.staff_members, member);
    }

    /// Insert or overwrite by key.
    pub fn put_setting(&self, setting: SiteSetting) {
        let mut rows = self.site_settings.write().unwrap_or_else(|p| p.into_inner());
        rows.retain(|s| s.key != setting.key);
        rows.push(setting);
    }

    /// Simulate losing the connection: every read fails until restored.
    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, AtomicOrdering::SeqCst);
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unavailable.load(AtomicOrdering::SeqCst) {
            return Err(AppError::Store(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn events(&self, select: &Select) -> Result<Vec<Event>, AppError> {
        self.check()?;
        Ok(read_all(&self.events, select))
    }

    async fn ministries(&self, select: &Select) -> Result<Vec<Ministry>, AppError> {
        self.check()?;
        Ok(read_all(&self.ministries, select))
    }

    async fn staff_members(&self, select: &Select) -> Result<Vec<StaffMember>, AppError> {
        self.check()?;
        Ok(read_all(&self.staff_members, select))
    }

    async fn site_settings(&self, select: &Select) -> Result<Vec<SiteSetting>, AppError> {
        self.check()?;
        Ok(read_all(&self.site_settings, select))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}
