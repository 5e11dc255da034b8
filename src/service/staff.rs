//! Active staff members and their grouping for display.

use crate::error::AppError;
use crate::model::{StaffCategory, StaffMember};
use crate::sql::{Condition, Direction, Select};
use crate::store::RecordStore;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct StaffMemberService {
    store: Arc<dyn RecordStore>,
}

impl StaffMemberService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        StaffMemberService { store }
    }

    /// Active, non-deleted members by `display_order`, then `name`.
    pub async fn get_active(&self) -> Result<Vec<StaffMember>, AppError> {
        let select = Select::from::<StaffMember>()
            .filter(Condition::eq("is_active", true))
            .order_by("display_order", Direction::Asc)
            .order_by("name", Direction::Asc);
        self.store.staff_members(&select).await
    }
}

/// Members bucketed by category. Iteration follows `StaffCategory::ALL`, never map order.
#[derive(Clone, Debug, Default)]
pub struct StaffGroups {
    by_category: HashMap<StaffCategory, Vec<StaffMember>>,
}

impl StaffGroups {
    pub fn get(&self, category: StaffCategory) -> &[StaffMember] {
        self.by_category.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Non-empty groups in display order.
    pub fn iter(&self) -> impl Iterator<Item = (StaffCategory, &[StaffMember])> + '_ {
        StaffCategory::ALL
            .into_iter()
            .map(move |c| (c, self.get(c)))
            .filter(|(_, members)| !members.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.values().all(Vec::is_empty)
    }
}

/// Bucket members by category, keeping each member's relative input order.
pub fn group_by_category(members: Vec<StaffMember>) -> StaffGroups {
    let mut by_category: HashMap<StaffCategory, Vec<StaffMember>> = HashMap::new();
    for m in members {
        by_category.entry(m.category).or_default().push(m);
    }
    StaffGroups { by_category }
}
