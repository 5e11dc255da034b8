//! Upcoming public events.

use crate::error::AppError;
use crate::model::Event;
use crate::sql::{Condition, Direction, Select};
use crate::store::RecordStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct EventService {
    store: Arc<dyn RecordStore>,
}

impl EventService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        EventService { store }
    }

    /// Public, not-yet-past events whose visibility window contains now, soonest first,
    /// at most `limit`. Zero matches is an empty list, not an error.
    pub async fn get_upcoming(&self, limit: u32) -> Result<Vec<Event>, AppError> {
        self.get_upcoming_at(Utc::now(), limit).await
    }

    pub async fn get_upcoming_at(&self, now: DateTime<Utc>, limit: u32) -> Result<Vec<Event>, AppError> {
        self.store.events(&upcoming_query(now, limit)).await
    }
}

pub(crate) fn upcoming_query(now: DateTime<Utc>, limit: u32) -> Select {
    Select::from::<Event>()
        .filter(Condition::eq("is_public", true))
        .filter(Condition::gte("event_date", now))
        .filter(Condition::unset_or_lte("visible_from", now))
        .filter(Condition::unset_or_gte("visible_until", now))
        .order_by("event_date", Direction::Asc)
        .limit(limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::build_select;

    #[test]
    fn upcoming_sql_shape() {
        let now = Utc::now();
        let q = build_select(&upcoming_query(now, 6));
        assert!(q.sql.ends_with(
            " FROM \"events\" WHERE \"deleted_at\" IS NULL AND \"is_public\" = $1 AND \"event_date\" >= $2 \
             AND (\"visible_from\" IS NULL OR \"visible_from\" <= $3) \
             AND (\"visible_until\" IS NULL OR \"visible_until\" >= $4) \
             ORDER BY \"event_date\" ASC LIMIT 6"
        ));
        assert_eq!(q.params.len(), 4);
    }
}
