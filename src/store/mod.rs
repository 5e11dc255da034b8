//! Record store boundary: filtered, ordered, limited reads against the four collections.

mod memory;
pub mod migration;
mod postgres;
pub mod seed;

pub use memory::{evaluate, MemoryStore};
pub use postgres::{connect, PgStore};

use crate::error::AppError;
use crate::model::{Event, Ministry, SiteSetting, StaffMember};
use crate::sql::Select;
use async_trait::async_trait;

/// Read access to the record collections. Implementations never retry; a failed
/// read surfaces as `AppError::Store`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn events(&self, select: &Select) -> Result<Vec<Event>, AppError>;

    async fn ministries(&self, select: &Select) -> Result<Vec<Ministry>, AppError>;

    async fn staff_members(&self, select: &Select) -> Result<Vec<StaffMember>, AppError>;

    async fn site_settings(&self, select: &Select) -> Result<Vec<SiteSetting>, AppError>;

    /// Round-trip to the store; used by readiness.
    async fn ping(&self) -> Result<(), AppError>;
}
