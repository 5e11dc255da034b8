//! Demo content for a fresh database. The builders are pure so the same rows can
//! populate a `MemoryStore`.

use super::MemoryStore;
use crate::error::AppError;
use crate::model::{Event, Ministry, SiteSetting, StaffCategory, StaffMember};
use chrono::{DateTime, Datelike, Duration, Months, NaiveTime, Utc, Weekday};
use sqlx::PgPool;

/// Midnight UTC of the next `weekday` strictly after `from`'s date.
pub fn next_weekday(from: DateTime<Utc>, weekday: Weekday) -> DateTime<Utc> {
    let current = from.weekday().num_days_from_sunday() as i64;
    let target = weekday.num_days_from_sunday() as i64;
    let mut days = (target - current + 7) % 7;
    if days == 0 {
        days = 7;
    }
    (from.date_naive() + Duration::days(days))
        .and_time(NaiveTime::MIN)
        .and_utc()
}

fn at(day: DateTime<Utc>, hours: i64, minutes: i64) -> DateTime<Utc> {
    day + Duration::hours(hours) + Duration::minutes(minutes)
}

pub fn events(now: DateTime<Utc>) -> Vec<Event> {
    let month_out = now
        .checked_add_months(Months::new(1))
        .unwrap_or(now + Duration::days(30))
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc();
    let rows = [
        (
            "Lord's Day Morning Worship",
            "Join us for our regular Lord's Day morning worship service with preaching from God's Word.",
            at(next_weekday(now, Weekday::Sun), 10, 30),
            "Main Sanctuary",
        ),
        (
            "Men's Prayer Breakfast",
            "Monthly men's fellowship and prayer breakfast. All men are welcome.",
            at(next_weekday(now, Weekday::Sat), 8, 0),
            "Fellowship Hall",
        ),
        (
            "Women's Bible Study",
            "Weekly women's Bible study exploring the book of Ruth.",
            at(next_weekday(now, Weekday::Tue), 10, 0),
            "Room 204",
        ),
        (
            "Youth Group Game Night",
            "Fun and fellowship for students in grades 6-12. Bring a friend!",
            at(next_weekday(now, Weekday::Fri), 18, 30),
            "Youth Room",
        ),
        (
            "Church Picnic",
            "Annual church picnic at the park. Bring a dish to share. Hamburgers and hot dogs provided.",
            at(month_out, 11, 0),
            "Riverside Park, Shelter 3",
        ),
    ];
    rows.into_iter()
        .zip(1..)
        .map(|((title, description, date, location), id)| {
            let mut e = Event::new(id, title, date, now);
            e.description = description.into();
            e.location = location.into();
            e
        })
        .collect()
}

pub fn staff_members(now: DateTime<Utc>) -> Vec<StaffMember> {
    let rows = [
        ("Rev. James McAllister", "Senior Pastor", "pastor@sachapel.com", 1, StaffCategory::Pastor,
            "Pastor McAllister has served the congregation since 2008 and is devoted to expository preaching."),
        ("Rev. David Kim", "Associate Pastor", "dkim@sachapel.com", 2, StaffCategory::Pastor,
            "Pastor Kim oversees adult education, small groups, and missions."),
        ("Sarah Mitchell", "Director of Music", "music@sachapel.com", 1, StaffCategory::Staff,
            "Sarah leads the music ministry and directs the church choir."),
        ("Robert Chen", "Youth Director", "youth@sachapel.com", 2, StaffCategory::Staff,
            "Robert leads the youth ministry and teaches the fundamentals of the faith."),
        ("Linda Patterson", "Office Administrator", "office@sachapel.com", 3, StaffCategory::Staff,
            "Linda manages church communications and coordinates facility use."),
    ];
    rows.into_iter()
        .zip(1..)
        .map(|((name, title, email, order, category, bio), id)| {
            let mut m = StaffMember::new(id, name, title, category, order, now);
            m.email = email.into();
            m.bio = bio.into();
            m
        })
        .collect()
}

pub fn ministries(now: DateTime<Utc>) -> Vec<Ministry> {
    let rows = [
        ("Sunday School", "sunday-school", "Sundays, 9:15 AM", "Education Wing",
            "Biblical instruction for all ages every Lord's Day morning.",
            "<h2>Rooted in the Word</h2><p>Each Sunday morning our congregation gathers by age group to study the Word together.</p>"),
        ("Women's Ministry", "womens-ministry", "Tuesdays, 10:00 AM", "Room 204",
            "Encouraging women to grow in grace through Bible study, fellowship, and service.",
            "<h2>Women Growing Together in Grace</h2><p>We exist to help women know Christ more deeply and serve one another joyfully.</p>"),
        ("Youth Ministry", "youth-ministry", "Sundays, 5:00 PM", "Youth Room",
            "Discipling students in grades 6-12 in the truth of God's Word.",
            "<h2>Raising Up the Next Generation</h2><p>Students are rooted in the Word and the life of the church.</p>"),
        ("Music Ministry", "music-ministry", "Thursdays, 7:00 PM (Choir rehearsal)", "Sanctuary",
            "Psalmody, hymnody, and choral worship to the glory of God.",
            "<h2>Singing to the Glory of God</h2><p>Corporate song is an act of worship.</p>"),
        ("Mercy Ministry", "mercy-ministry", "As needs arise", "Various locations",
            "Serving those in need within our congregation and community.",
            "<h2>The Ministry of Mercy</h2><p>The gospel proclaimed in word and embodied in deed.</p>"),
        ("Men's Fellowship", "mens-fellowship", "Second Saturday of each month, 8:00 AM", "Fellowship Hall",
            "Building men of God through prayer, accountability, and Scripture study.",
            "<h2>Iron Sharpening Iron</h2><p>Men rooted in Christ and faithful to the church.</p>"),
    ];
    rows.into_iter()
        .zip(1..)
        .map(|((name, slug, meeting, location, description, content), id)| {
            let mut m = Ministry::new(id, name, slug, id as i32, now);
            m.meeting_time = meeting.into();
            m.location = location.into();
            m.description = description.into();
            m.page_content = content.into();
            m.contact_email = format!("{}@sachapel.com", slug.split('-').next().unwrap_or(slug));
            m
        })
        .collect()
}

pub fn site_settings(now: DateTime<Utc>) -> Vec<SiteSetting> {
    [
        ("church_name", "Saint Andrew's Chapel", "Name shown in the header and title"),
        ("tagline", "A Reformed congregation worshiping together", "Home page subtitle"),
        ("service_times", "Sunday School 9:15 AM · Morning Worship 10:30 AM", "Home page service times"),
        ("address", "5025 Palmetto Avenue", "Street address"),
        ("phone", "(555) 010-2000", "Office phone"),
        ("email", "office@sachapel.com", "Office email"),
        ("history_content", "<p>Our congregation was planted to proclaim the whole counsel of God.</p>", "About: history"),
        ("beliefs_content", "<p>We hold to the historic Reformed confessions.</p>", "About: beliefs"),
        ("worship_content", "<p>Our worship is ordered by Scripture.</p>", "About: worship"),
        ("gospel_content", "<p>Christ died for sinners and rose again.</p>", "About: gospel"),
        ("building_content", "<p>Our sanctuary seats four hundred.</p>", "About: building"),
    ]
    .into_iter()
    .map(|(key, value, description)| {
        let mut s = SiteSetting::new(key, value, now);
        s.description = description.into();
        s
    })
    .collect()
}

/// A `MemoryStore` holding the demo content.
pub fn memory_store(now: DateTime<Utc>) -> Result<MemoryStore, AppError> {
    let store = MemoryStore::new();
    for e in events(now) {
        store.insert_event(e);
    }
    for m in staff_members(now) {
        store.insert_staff_member(m);
    }
    for m in ministries(now) {
        store.insert_ministry(m)?;
    }
    for s in site_settings(now) {
        store.put_setting(s);
    }
    Ok(store)
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub events: usize,
    pub staff_members: usize,
    pub ministries: usize,
    pub site_settings: usize,
}

/// Insert demo content. Ministries and settings are skipped when their slug/key already
/// exists; a failing row is logged and skipped.
pub async fn seed(pool: &PgPool) -> Result<SeedReport, AppError> {
    let now = Utc::now();
    let mut report = SeedReport::default();

    for e in events(now) {
        let result = sqlx::query(
            "INSERT INTO events (title, description, event_date, location, is_public) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&e.title)
        .bind(&e.description)
        .bind(e.event_date)
        .bind(&e.location)
        .bind(e.is_public)
        .execute(pool)
        .await;
        match result {
            Ok(_) => {
                report.events += 1;
                tracing::info!(title = %e.title, date = %e.event_date.format("%b %-d, %Y %-I:%M %p"), "seeded event");
            }
            Err(err) => tracing::error!(title = %e.title, error = %err, "failed to seed event"),
        }
    }

    for m in staff_members(now) {
        let result = sqlx::query(
            "INSERT INTO staff_members (name, title, bio, email, display_order, is_active, category) VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&m.name)
        .bind(&m.title)
        .bind(&m.bio)
        .bind(&m.email)
        .bind(m.display_order)
        .bind(m.is_active)
        .bind(m.category.as_str())
        .execute(pool)
        .await;
        match result {
            Ok(_) => {
                report.staff_members += 1;
                tracing::info!(name = %m.name, title = %m.title, "seeded staff member");
            }
            Err(err) => tracing::error!(name = %m.name, error = %err, "failed to seed staff member"),
        }
    }

    for m in ministries(now) {
        let result = sqlx::query(
            r#"
            INSERT INTO ministries (name, slug, description, contact_email, meeting_time, location, is_active, sort_order, page_content)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (slug) DO NOTHING
            "#,
        )
        .bind(&m.name)
        .bind(&m.slug)
        .bind(&m.description)
        .bind(&m.contact_email)
        .bind(&m.meeting_time)
        .bind(&m.location)
        .bind(m.is_active)
        .bind(m.sort_order)
        .bind(&m.page_content)
        .execute(pool)
        .await;
        match result {
            Ok(r) if r.rows_affected() == 0 => tracing::info!(slug = %m.slug, "ministry already present"),
            Ok(_) => {
                report.ministries += 1;
                tracing::info!(name = %m.name, slug = %m.slug, "seeded ministry");
            }
            Err(err) => tracing::error!(slug = %m.slug, error = %err, "failed to seed ministry"),
        }
    }

    for s in site_settings(now) {
        let result = sqlx::query(
            "INSERT INTO site_settings (key, value, description, updated_at) VALUES ($1, $2, $3, $4) ON CONFLICT (key) DO NOTHING",
        )
        .bind(&s.key)
        .bind(&s.value)
        .bind(&s.description)
        .bind(s.updated_at)
        .execute(pool)
        .await;
        match result {
            Ok(r) if r.rows_affected() == 0 => {}
            Ok(_) => report.site_settings += 1,
            Err(err) => tracing::error!(key = %s.key, error = %err, "failed to seed site setting"),
        }
    }

    tracing::info!(
        events = report.events,
        staff_members = report.staff_members,
        ministries = report.ministries,
        site_settings = report.site_settings,
        "seeding complete"
    );
    Ok(report)
}
