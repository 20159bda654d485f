// src/domain/clinic_service/entity.rs
use crate::domain::content::{Body, Slug, Title};
use chrono::{DateTime, Utc};

uuid_id!(ServiceId);

#[derive(Debug, Clone)]
pub struct ClinicService {
    pub id: ServiceId,
    pub title: Title,
    pub slug: Slug,
    pub description: Body,
    pub content: Body,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewClinicService {
    pub title: Title,
    pub slug: Slug,
    pub description: Body,
    pub content: Body,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

/// Partial update; see [`crate::domain::blog::BlogPostUpdate`] for the
/// `Option<Option<_>>` convention.
#[derive(Debug, Clone)]
pub struct ClinicServiceUpdate {
    pub id: ServiceId,
    pub title: Option<Title>,
    pub slug: Option<Slug>,
    pub description: Option<Body>,
    pub content: Option<Body>,
    pub icon: Option<Option<String>>,
    pub image: Option<Option<String>>,
    pub order: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

impl ClinicServiceUpdate {
    pub fn new(id: ServiceId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            description: None,
            content: None,
            icon: None,
            image: None,
            order: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: Title, slug: Option<Slug>) -> Self {
        self.title = Some(title);
        self.slug = slug;
        self
    }

    pub fn with_description(mut self, description: Body) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_content(mut self, content: Body) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_icon(mut self, icon: Option<String>) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }
}
