mod common;

use chapel_site::model::{Event, Ministry, SiteSetting, SoftDeletable, StaffCategory, StaffMember};
use chapel_site::service::{group_by_category, EventService, MinistryService, SiteSettingsService, StaffMemberService};
use chapel_site::{AppError, MemoryStore};
use chrono::{Duration, Utc};
use std::collections::BTreeSet;
use std::sync::Arc;

fn event(id: i64, title: &str, offset: Duration) -> Event {
    let now = Utc::now();
    Event::new(id, title, now + offset, now)
}

#[tokio::test]
async fn upcoming_excludes_past_events() {
    let store = Arc::new(MemoryStore::new());
    store.insert_event(event(1, "Tomorrow", Duration::days(1)));
    store.insert_event(event(2, "Yesterday", Duration::days(-1)));
    let events = EventService::new(store).get_upcoming(10).await.unwrap();
    let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Tomorrow"]);
}

#[tokio::test]
async fn upcoming_is_sorted_and_limited() {
    let store = Arc::new(MemoryStore::new());
    for (id, days) in [(1, 5), (2, 1), (3, 3), (4, 2), (5, 4)] {
        store.insert_event(event(id, &format!("in {days} days"), Duration::days(days)));
    }
    let events = EventService::new(store).get_upcoming(3).await.unwrap();
    let ids: Vec<_> = events.iter().map(|e| e.base.id).collect();
    assert_eq!(ids, [2, 4, 3]);
    assert!(events.windows(2).all(|w| w[0].event_date <= w[1].event_date));
}

#[tokio::test]
async fn upcoming_respects_visibility_window_and_flags() {
    let now = Utc::now();
    let store = Arc::new(MemoryStore::new());

    let mut private = event(1, "Elders meeting", Duration::days(1));
    private.is_public = false;
    store.insert_event(private);

    let mut not_yet = event(2, "Announced later", Duration::days(2));
    not_yet.visible_from = Some(now + Duration::hours(12));
    store.insert_event(not_yet);

    let mut expired = event(3, "Listing closed", Duration::days(3));
    expired.visible_until = Some(now - Duration::hours(1));
    store.insert_event(expired);

    let mut deleted = event(4, "Cancelled", Duration::days(4));
    deleted.soft_delete(now);
    store.insert_event(deleted);

    let mut open = event(5, "Open window", Duration::days(5));
    open.visible_from = Some(now - Duration::days(1));
    open.visible_until = Some(now + Duration::days(10));
    store.insert_event(open);

    let events = EventService::new(store).get_upcoming_at(now, 10).await.unwrap();
    let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Open window"]);
    assert!(events.iter().all(|e| e.is_listed_at(now)));
}

#[tokio::test]
async fn event_starting_exactly_now_is_upcoming() {
    let now = Utc::now();
    let store = Arc::new(MemoryStore::new());
    store.insert_event(Event::new(1, "Starting now", now, now));
    store.insert_event(Event::new(2, "Just started", now - Duration::seconds(1), now));
    let events = EventService::new(store).get_upcoming_at(now, 10).await.unwrap();
    let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Starting now"]);
}

#[tokio::test]
async fn no_upcoming_events_is_empty_not_error() {
    let events = EventService::new(Arc::new(MemoryStore::new())).get_upcoming(6).await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn active_ministries_sorted_by_order_then_name() {
    let now = Utc::now();
    let store = Arc::new(MemoryStore::new());
    store.insert_ministry(Ministry::new(1, "Zeta", "zeta", 2, now)).unwrap();
    store.insert_ministry(Ministry::new(2, "Beta", "beta", 1, now)).unwrap();
    store.insert_ministry(Ministry::new(3, "Alpha", "alpha", 1, now)).unwrap();
    let mut hidden = Ministry::new(4, "Dormant", "dormant", 0, now);
    hidden.is_active = false;
    store.insert_ministry(hidden).unwrap();

    let names: Vec<_> = MinistryService::new(store)
        .get_active()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, ["Alpha", "Beta", "Zeta"]);
}

#[tokio::test]
async fn ministry_by_slug() {
    let now = Utc::now();
    let store = Arc::new(MemoryStore::new());
    store.insert_ministry(Ministry::new(1, "Youth Ministry", "youth", 1, now)).unwrap();
    let mut inactive = Ministry::new(2, "Old Choir", "old-choir", 2, now);
    inactive.is_active = false;
    store.insert_ministry(inactive).unwrap();
    let mut deleted = Ministry::new(3, "Retired", "retired", 3, now);
    deleted.soft_delete(now);
    store.insert_ministry(deleted).unwrap();

    let service = MinistryService::new(store);
    assert_eq!(service.get_by_slug("youth").await.unwrap().name, "Youth Ministry");

    for slug in ["old-choir", "retired", "missing"] {
        match service.get_by_slug(slug).await {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "Ministry not found"),
            other => panic!("{slug}: expected NotFound, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn staff_grouped_by_category_in_display_order() {
    let now = Utc::now();
    let store = Arc::new(MemoryStore::new());
    store.insert_staff_member(StaffMember::new(1, "Rev. A", "Senior Pastor", StaffCategory::Pastor, 1, now));
    store.insert_staff_member(StaffMember::new(2, "Bea", "Organist", StaffCategory::Staff, 2, now));
    store.insert_staff_member(StaffMember::new(3, "Al", "Office", StaffCategory::Staff, 1, now));
    let mut away = StaffMember::new(4, "Gone", "Former", StaffCategory::Staff, 0, now);
    away.is_active = false;
    store.insert_staff_member(away);

    let members = StaffMemberService::new(store).get_active().await.unwrap();
    assert_eq!(members.len(), 3);
    let groups = group_by_category(members);

    let pastors: Vec<_> = groups.get(StaffCategory::Pastor).iter().map(|m| m.name.as_str()).collect();
    let staff: Vec<_> = groups.get(StaffCategory::Staff).iter().map(|m| m.name.as_str()).collect();
    assert_eq!(pastors, ["Rev. A"]);
    assert_eq!(staff, ["Al", "Bea"]);
    let order: Vec<_> = groups.iter().map(|(c, _)| c).collect();
    assert_eq!(order, [StaffCategory::Pastor, StaffCategory::Staff]);
}

#[tokio::test]
async fn settings_expose_every_seeded_key() {
    let store = common::seeded_store(Utc::now());
    let settings = SiteSettingsService::new(store).get_all().await.unwrap();
    for key in [
        "church_name",
        "tagline",
        "service_times",
        "history_content",
        "beliefs_content",
        "worship_content",
        "gospel_content",
        "building_content",
    ] {
        assert!(settings.get(key).is_some(), "missing {key}");
    }
    assert_eq!(settings.get("church_name"), Some("Saint Andrew's Chapel"));
}

#[tokio::test]
async fn settings_key_set_matches_stored_keys() {
    let now = Utc::now();
    let store = Arc::new(MemoryStore::new());
    for key in ["church_name", "tagline", "phone", "email"] {
        store.put_setting(SiteSetting::new(key, format!("{key} value"), now));
    }
    store.put_setting(SiteSetting::new("phone", "(555) 010-9999", now));

    let settings = SiteSettingsService::new(store).get_all().await.unwrap();
    let keys: BTreeSet<&str> = settings.keys().collect();
    assert_eq!(keys, BTreeSet::from(["church_name", "email", "phone", "tagline"]));
    assert_eq!(settings.get("phone"), Some("(555) 010-9999"));
}

#[tokio::test]
async fn unavailable_store_is_an_error_for_every_service() {
    let store = common::seeded_store(Utc::now());
    store.set_available(false);
    assert!(matches!(EventService::new(store.clone()).get_upcoming(6).await, Err(AppError::Store(_))));
    assert!(matches!(MinistryService::new(store.clone()).get_active().await, Err(AppError::Store(_))));
    assert!(matches!(MinistryService::new(store.clone()).get_by_slug("youth-ministry").await, Err(AppError::Store(_))));
    assert!(matches!(StaffMemberService::new(store.clone()).get_active().await, Err(AppError::Store(_))));
    assert!(matches!(SiteSettingsService::new(store).get_all().await, Err(AppError::Store(_))));
}
