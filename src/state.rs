//! Shared application state for all routes. Holds no request-scoped data.

use crate::cache::CacheProbe;
use crate::render::Renderer;
use crate::service::{EventService, MinistryService, SiteSettingsService, StaffMemberService};
use crate::store::RecordStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub cache: Arc<dyn CacheProbe>,
    pub renderer: Arc<dyn Renderer>,
    pub events: EventService,
    pub ministries: MinistryService,
    pub staff_members: StaffMemberService,
    pub site_settings: SiteSettingsService,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, cache: Arc<dyn CacheProbe>, renderer: Arc<dyn Renderer>) -> Self {
        AppState {
            events: EventService::new(store.clone()),
            ministries: MinistryService::new(store.clone()),
            staff_members: StaffMemberService::new(store.clone()),
            site_settings: SiteSettingsService::new(store.clone()),
            store,
            cache,
            renderer,
        }
    }
}
