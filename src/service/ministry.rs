//! Active ministries, listed and looked up by slug.

use crate::error::AppError;
use crate::model::Ministry;
use crate::sql::{Condition, Direction, Select};
use crate::store::RecordStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct MinistryService {
    store: Arc<dyn RecordStore>,
}

impl MinistryService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        MinistryService { store }
    }

    /// Active, non-deleted ministries by `sort_order`, then `name`.
    pub async fn get_active(&self) -> Result<Vec<Ministry>, AppError> {
        let select = Select::from::<Ministry>()
            .filter(Condition::eq("is_active", true))
            .order_by("sort_order", Direction::Asc)
            .order_by("name", Direction::Asc);
        self.store.ministries(&select).await
    }

    /// The active ministry with this slug. Inactive and nonexistent slugs both
    /// yield `NotFound`, so an inactive ministry's existence is not revealed.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Ministry, AppError> {
        let select = Select::from::<Ministry>()
            .filter(Condition::eq("slug", slug))
            .filter(Condition::eq("is_active", true))
            .limit(1);
        self.store
            .ministries(&select)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("Ministry not found".into()))
    }
}
