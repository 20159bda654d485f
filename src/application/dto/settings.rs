use crate::domain::settings::SiteSettings;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettingsDto {
    pub profile_photo_url: Option<String>,
    pub hero_photo_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<SiteSettings> for SiteSettingsDto {
    fn from(settings: SiteSettings) -> Self {
        Self {
            profile_photo_url: settings.profile_photo_url,
            hero_photo_url: settings.hero_photo_url,
            updated_at: settings.updated_at,
        }
    }
}
