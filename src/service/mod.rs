//! Query services: one per record kind, each a fixed set of reads with fixed filter/sort semantics.

mod event;
mod ministry;
mod settings;
mod staff;

pub use event::EventService;
pub use ministry::MinistryService;
pub use settings::{SiteSettings, SiteSettingsService};
pub use staff::{group_by_category, StaffGroups, StaffMemberService};
