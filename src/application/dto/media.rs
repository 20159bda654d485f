use crate::domain::media::Media;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaDto {
    pub id: Uuid,
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Media> for MediaDto {
    fn from(media: Media) -> Self {
        Self {
            id: media.id.into(),
            filename: media.filename,
            original_name: media.original_name,
            mime_type: media.mime_type,
            size: media.size,
            url: media.url,
            created_at: media.created_at,
        }
    }
}
