// src/domain/settings/mod.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Site-wide presentation settings. Exactly one row exists once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub profile_photo_url: Option<String>,
    pub hero_photo_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct SiteSettingsUpdate {
    pub profile_photo_url: Option<Option<String>>,
    pub hero_photo_url: Option<Option<String>>,
}

impl SiteSettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.profile_photo_url.is_none() && self.hero_photo_url.is_none()
    }
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Return the settings row, creating an empty one first if needed.
    async fn get_or_create(&self, now: DateTime<Utc>) -> DomainResult<SiteSettings>;
    async fn update(&self, update: SiteSettingsUpdate, now: DateTime<Utc>)
    -> DomainResult<SiteSettings>;
}
