//! Rendering step: a named page plus its data in, HTML bytes out.

mod templates;

pub use templates::MaudRenderer;

use crate::error::AppError;
use chrono::{DateTime, Utc};
use crate::model::{Event, Ministry};
use crate::service::{SiteSettings, StaffGroups};

/// Settings-only sections under `/about`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AboutSection {
    History,
    Beliefs,
    Worship,
    Gospel,
    Building,
}

impl AboutSection {
    pub fn title(self) -> &'static str {
        match self {
            AboutSection::History => "Our History",
            AboutSection::Beliefs => "Doctrine & Beliefs",
            AboutSection::Worship => "Theology of Worship",
            AboutSection::Gospel => "The Gospel",
            AboutSection::Building => "Our Building",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            AboutSection::History => "/about/history",
            AboutSection::Beliefs => "/about/beliefs",
            AboutSection::Worship => "/about/worship",
            AboutSection::Gospel => "/about/gospel",
            AboutSection::Building => "/about/building",
        }
    }

    /// Site setting holding this section's rich-text body.
    pub fn content_key(self) -> &'static str {
        match self {
            AboutSection::History => "history_content",
            AboutSection::Beliefs => "beliefs_content",
            AboutSection::Worship => "worship_content",
            AboutSection::Gospel => "gospel_content",
            AboutSection::Building => "building_content",
        }
    }
}

pub enum Page<'a> {
    Home {
        settings: &'a SiteSettings,
        events: &'a [Event],
        /// Clock the events were selected at; drives registration status.
        now: DateTime<Utc>,
    },
    About {
        section: AboutSection,
        settings: &'a SiteSettings,
    },
    Staff {
        settings: &'a SiteSettings,
        groups: &'a StaffGroups,
    },
    MinistriesIndex {
        ministries: &'a [Ministry],
    },
    MinistryShow {
        ministry: &'a Ministry,
    },
}

impl Page<'_> {
    /// Stable page identity, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Page::Home { .. } => "home",
            Page::About { section, .. } => match section {
                AboutSection::History => "about_history",
                AboutSection::Beliefs => "about_beliefs",
                AboutSection::Worship => "about_worship",
                AboutSection::Gospel => "about_gospel",
                AboutSection::Building => "about_building",
            },
            Page::Staff { .. } => "about_staff",
            Page::MinistriesIndex { .. } => "ministries_index",
            Page::MinistryShow { .. } => "ministry_show",
        }
    }
}

pub trait Renderer: Send + Sync {
    fn render(&self, page: &Page<'_>) -> Result<String, AppError>;
}
