use crate::domain::faq::Faq;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaqDto {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Faq> for FaqDto {
    fn from(faq: Faq) -> Self {
        Self {
            id: faq.id.into(),
            question: faq.question,
            answer: faq.answer,
            created_at: faq.created_at,
            updated_at: faq.updated_at,
        }
    }
}
