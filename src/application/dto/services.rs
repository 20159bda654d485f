use crate::domain::clinic_service::ClinicService;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClinicServiceDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ClinicService> for ClinicServiceDto {
    fn from(service: ClinicService) -> Self {
        Self {
            id: service.id.into(),
            title: service.title.into_inner(),
            slug: service.slug.into_inner(),
            description: service.description.into_inner(),
            content: service.content.into_inner(),
            icon: service.icon,
            image: service.image,
            order: service.order,
            created_at: service.created_at,
            updated_at: service.updated_at,
        }
    }
}
