//! Church events. Soft-deletable; optionally owned by a ministry.

use super::{base::soft_deletable, text_column_enum, Record, SoftDeleteModel, UnknownVariant};
use crate::sql::SqlValue;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceRule {
    Weekly,
    Biweekly,
    Monthly,
    Yearly,
}

impl RecurrenceRule {
    pub fn as_str(self) -> &'static str {
        match self {
            RecurrenceRule::Weekly => "weekly",
            RecurrenceRule::Biweekly => "biweekly",
            RecurrenceRule::Monthly => "monthly",
            RecurrenceRule::Yearly => "yearly",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecurrenceRule::Weekly => "Every week",
            RecurrenceRule::Biweekly => "Every other week",
            RecurrenceRule::Monthly => "Every month",
            RecurrenceRule::Yearly => "Every year",
        }
    }
}

impl FromStr for RecurrenceRule {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(RecurrenceRule::Weekly),
            "biweekly" => Ok(RecurrenceRule::Biweekly),
            "monthly" => Ok(RecurrenceRule::Monthly),
            "yearly" => Ok(RecurrenceRule::Yearly),
            other => Err(UnknownVariant {
                kind: "recurrence rule",
                value: other.to_string(),
            }),
        }
    }
}

text_column_enum!(RecurrenceRule);

#[derive(Clone, Debug, PartialEq, sqlx::FromRow, Serialize)]
pub struct Event {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub base: SoftDeleteModel,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: String,
    pub location_details: String,
    pub recurrence_rule: Option<RecurrenceRule>,
    pub recurrence_end: Option<NaiveDate>,
    pub registration_enabled: bool,
    pub capacity_limit: Option<i32>,
    pub registration_deadline: Option<DateTime<Utc>>,
    /// Unset = visible from the beginning of time.
    pub visible_from: Option<DateTime<Utc>>,
    /// Unset = visible until the event itself passes.
    pub visible_until: Option<DateTime<Utc>>,
    pub is_public: bool,
    pub ministry_id: Option<i64>,
    pub created_by: Option<i64>,
}

soft_deletable!(Event);

impl Event {
    /// Minimal public event with no window, recurrence or registration.
    pub fn new(id: i64, title: impl Into<String>, event_date: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Event {
            base: SoftDeleteModel::new(id, now),
            title: title.into(),
            description: String::new(),
            event_date,
            end_date: None,
            location: String::new(),
            location_details: String::new(),
            recurrence_rule: None,
            recurrence_end: None,
            registration_enabled: false,
            capacity_limit: None,
            registration_deadline: None,
            visible_from: None,
            visible_until: None,
            is_public: true,
            ministry_id: None,
            created_by: None,
        }
    }

    /// Public listing rule: public, not yet past, inside its visibility window, not deleted.
    pub fn is_listed_at(&self, now: DateTime<Utc>) -> bool {
        self.is_public
            && self.base.deleted_at.is_none()
            && self.event_date >= now
            && self.visible_from.map_or(true, |from| from <= now)
            && self.visible_until.map_or(true, |until| until >= now)
    }

    /// Registration is open when enabled and the deadline, if any, has not passed.
    pub fn registration_open_at(&self, now: DateTime<Utc>) -> bool {
        self.registration_enabled && self.registration_deadline.map_or(true, |d| d >= now)
    }
}

impl Record for Event {
    const TABLE: &'static str = "events";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_at",
        "updated_at",
        "deleted_at",
        "title",
        "description",
        "event_date",
        "end_date",
        "location",
        "location_details",
        "recurrence_rule",
        "recurrence_end",
        "registration_enabled",
        "capacity_limit",
        "registration_deadline",
        "visible_from",
        "visible_until",
        "is_public",
        "ministry_id",
        "created_by",
    ];
    const SOFT_DELETE: bool = true;

    fn column(&self, name: &str) -> SqlValue {
        if let Some(v) = self.base.column(name) {
            return v;
        }
        match name {
            "title" => self.title.clone().into(),
            "description" => self.description.clone().into(),
            "event_date" => self.event_date.into(),
            "end_date" => self.end_date.into(),
            "location" => self.location.clone().into(),
            "location_details" => self.location_details.clone().into(),
            "recurrence_rule" => self.recurrence_rule.map(RecurrenceRule::as_str).into(),
            "recurrence_end" => self.recurrence_end.into(),
            "registration_enabled" => self.registration_enabled.into(),
            "capacity_limit" => self.capacity_limit.into(),
            "registration_deadline" => self.registration_deadline.into(),
            "visible_from" => self.visible_from.into(),
            "visible_until" => self.visible_until.into(),
            "is_public" => self.is_public.into(),
            "ministry_id" => self.ministry_id.into(),
            "created_by" => self.created_by.into(),
            _ => SqlValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn recurrence_rule_parses_known_values_only() {
        assert_eq!("monthly".parse::<RecurrenceRule>().unwrap(), RecurrenceRule::Monthly);
        assert!("none".parse::<RecurrenceRule>().is_err());
    }

    #[test]
    fn listing_respects_window_bounds_inclusively() {
        let now = Utc::now();
        let mut e = Event::new(1, "Picnic", now + Duration::days(3), now);
        e.visible_from = Some(now);
        e.visible_until = Some(now);
        assert!(e.is_listed_at(now));
        e.visible_from = Some(now + Duration::seconds(1));
        assert!(!e.is_listed_at(now));
    }

    #[test]
    fn registration_closes_after_deadline() {
        let now = Utc::now();
        let mut e = Event::new(1, "Retreat", now + Duration::days(30), now);
        assert!(!e.registration_open_at(now));
        e.registration_enabled = true;
        e.registration_deadline = Some(now - Duration::hours(1));
        assert!(!e.registration_open_at(now));
        e.registration_deadline = None;
        assert!(e.registration_open_at(now));
    }

    #[test]
    fn base_columns_resolve_through_record() {
        let now = Utc::now();
        let e = Event::new(42, "Vespers", now, now);
        assert_eq!(e.column("id"), SqlValue::Int(42));
        assert!(e.column("deleted_at").is_null());
        assert!(e.column("recurrence_rule").is_null());
    }
}
