//! Site settings folded into a key/value map.

use crate::error::AppError;
use crate::model::SiteSetting;
use crate::sql::Select;
use crate::store::RecordStore;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteSettings(HashMap<String, String>);

impl SiteSettings {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<SiteSetting> for SiteSettings {
    /// Later rows win on a repeated key.
    fn from_iter<I: IntoIterator<Item = SiteSetting>>(iter: I) -> Self {
        SiteSettings(iter.into_iter().map(|s| (s.key, s.value)).collect())
    }
}

#[derive(Clone)]
pub struct SiteSettingsService {
    store: Arc<dyn RecordStore>,
}

impl SiteSettingsService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        SiteSettingsService { store }
    }

    pub async fn get_all(&self) -> Result<SiteSettings, AppError> {
        let rows = self.store.site_settings(&Select::from::<SiteSetting>()).await?;
        let settings: SiteSettings = rows.into_iter().collect();
        tracing::debug!(count = settings.len(), "loaded site settings");
        Ok(settings)
    }
}
