//! Maud templates for every page. Interpolation is escaped; only ministry page content
//! and about-section bodies (administrator-authored rich text) are emitted raw.

use super::{AboutSection, Page, Renderer};
use crate::error::AppError;
use crate::model::{Event, Ministry, StaffMember};
use crate::service::{SiteSettings, StaffGroups};
use chrono::{DateTime, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};

const DEFAULT_SITE_NAME: &str = "Saint Andrew's Chapel";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Nav {
    Home,
    About,
    Ministries,
}

const ABOUT_NAV: [AboutSection; 5] = [
    AboutSection::History,
    AboutSection::Beliefs,
    AboutSection::Worship,
    AboutSection::Gospel,
    AboutSection::Building,
];

#[derive(Clone, Debug)]
pub struct MaudRenderer {
    app_url: String,
}

impl MaudRenderer {
    pub fn new(app_url: impl Into<String>) -> Self {
        MaudRenderer {
            app_url: app_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn layout(&self, site_name: &str, title: &str, path: &str, nav: Nav, body: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) " | " (site_name) }
                    link rel="canonical" href={ (self.app_url) (path) };
                    link rel="stylesheet" href="/static/css/site.css";
                }
                body {
                    header.site-header {
                        a.brand href="/" { (site_name) }
                        nav {
                            a href="/" class=[(nav == Nav::Home).then_some("active")] { "Home" }
                            a href="/about/history" class=[(nav == Nav::About).then_some("active")] { "About" }
                            a href="/ministries" class=[(nav == Nav::Ministries).then_some("active")] { "Ministries" }
                        }
                    }
                    main { (body) }
                    footer.site-footer {
                        p { "© " (site_name) }
                    }
                }
            }
        }
    }

    fn home(&self, settings: &SiteSettings, events: &[Event], now: DateTime<Utc>) -> Markup {
        let site_name = settings.get_or("church_name", DEFAULT_SITE_NAME);
        let body = html! {
            section.hero {
                h1 { (site_name) }
                @if let Some(tagline) = settings.get("tagline") {
                    p.tagline { (tagline) }
                }
                @if let Some(times) = settings.get("service_times") {
                    p.service-times { (times) }
                }
            }
            section.events {
                h2 { "Upcoming Events" }
                @if events.is_empty() {
                    p.empty { "No upcoming events are scheduled. Please check back soon." }
                } @else {
                    ul.event-list {
                        @for event in events {
                            (event_card(event, now))
                        }
                    }
                }
            }
            @if let Some(address) = settings.get("address") {
                section.visit {
                    h2 { "Visit Us" }
                    p { (address) }
                    @if let Some(phone) = settings.get("phone") {
                        p { (phone) }
                    }
                }
            }
        };
        self.layout(site_name, "Home", "/", Nav::Home, body)
    }

    fn about(&self, section: AboutSection, settings: &SiteSettings) -> Markup {
        let site_name = settings.get_or("church_name", DEFAULT_SITE_NAME);
        let body = html! {
            (about_nav(Some(section)))
            article.about {
                h1 { (section.title()) }
                (PreEscaped(settings.get_or(section.content_key(), "")))
            }
        };
        self.layout(site_name, section.title(), section.path(), Nav::About, body)
    }

    fn staff(&self, settings: &SiteSettings, groups: &StaffGroups) -> Markup {
        let site_name = settings.get_or("church_name", DEFAULT_SITE_NAME);
        let body = html! {
            (about_nav(None))
            article.staff {
                h1 { "Pastors & Staff" }
                @for (category, members) in groups.iter() {
                    section.staff-group {
                        h2 { (category.label()) }
                        @for member in members {
                            (staff_card(member))
                        }
                    }
                }
            }
        };
        self.layout(site_name, "Pastors & Staff", "/about/staff", Nav::About, body)
    }

    fn ministries_index(&self, ministries: &[Ministry]) -> Markup {
        let body = html! {
            h1 { "Ministries" }
            @if ministries.is_empty() {
                p.empty { "Ministry information is coming soon." }
            }
            ul.ministry-list {
                @for m in ministries {
                    li.ministry {
                        h2 { a href={ "/ministries/" (m.slug) } { (m.name) } }
                        p { (m.description) }
                        @if !m.meeting_time.is_empty() {
                            p.meeting { (m.meeting_time) }
                        }
                    }
                }
            }
        };
        self.layout(DEFAULT_SITE_NAME, "Ministries", "/ministries", Nav::Ministries, body)
    }

    fn ministry_show(&self, m: &Ministry) -> Markup {
        let path = format!("/ministries/{}", m.slug);
        let body = html! {
            article.ministry-detail {
                h1 { (m.name) }
                p.lead { (m.description) }
                dl {
                    @if !m.meeting_time.is_empty() {
                        dt { "When" } dd { (m.meeting_time) }
                    }
                    @if !m.location.is_empty() {
                        dt { "Where" } dd { (m.location) }
                    }
                    @if !m.contact_email.is_empty() {
                        dt { "Contact" } dd { a href={ "mailto:" (m.contact_email) } { (m.contact_email) } }
                    }
                }
                div.content { (PreEscaped(&m.page_content)) }
                p { a href="/ministries" { "All ministries" } }
            }
        };
        self.layout(DEFAULT_SITE_NAME, &m.name, &path, Nav::Ministries, body)
    }
}

fn about_nav(current: Option<AboutSection>) -> Markup {
    html! {
        nav.subnav {
            @for section in ABOUT_NAV {
                a href=(section.path()) class=[(current == Some(section)).then_some("active")] { (section.title()) }
            }
            a href="/about/staff" class=[current.is_none().then_some("active")] { "Pastors & Staff" }
        }
    }
}

fn event_card(event: &Event, now: DateTime<Utc>) -> Markup {
    html! {
        li.event {
            h3 { (event.title) }
            p.when {
                time datetime=(event.event_date.to_rfc3339()) {
                    (event.event_date.format("%a, %b %-d · %-I:%M %p").to_string())
                }
                @if let Some(end) = event.end_date {
                    " – " (end.format("%-I:%M %p").to_string())
                }
            }
            @if !event.location.is_empty() {
                p.location { (event.location) }
            }
            @if let Some(rule) = event.recurrence_rule {
                p.recurs { (rule.label()) }
            }
            @if event.registration_open_at(now) {
                p.registration {
                    "Registration open"
                    @if let Some(deadline) = event.registration_deadline {
                        " until " (deadline.format("%b %-d").to_string())
                    }
                }
            }
            @if !event.description.is_empty() {
                p { (event.description) }
            }
        }
    }
}

fn staff_card(member: &StaffMember) -> Markup {
    html! {
        div.staff-member {
            @if !member.photo_url.is_empty() {
                img src=(member.photo_url) alt=(member.name);
            }
            h3 { (member.name) }
            p.title { (member.title) }
            @if !member.bio.is_empty() {
                p.bio { (member.bio) }
            }
            @if !member.email.is_empty() {
                a href={ "mailto:" (member.email) } { (member.email) }
            }
        }
    }
}

impl Renderer for MaudRenderer {
    fn render(&self, page: &Page<'_>) -> Result<String, AppError> {
        let markup = match page {
            Page::Home { settings, events, now } => self.home(settings, events, *now),
            Page::About { section, settings } => self.about(*section, settings),
            Page::Staff { settings, groups } => self.staff(settings, groups),
            Page::MinistriesIndex { ministries } => self.ministries_index(ministries),
            Page::MinistryShow { ministry } => self.ministry_show(ministry),
        };
        Ok(markup.into_string())
    }
}
