// src/domain/media/mod.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

uuid_id!(MediaId);

#[derive(Debug, Clone)]
pub struct Media {
    pub id: MediaId,
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub path: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMedia {
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub path: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait MediaRepository: Send + Sync {
    async fn insert(&self, media: NewMedia) -> DomainResult<Media>;
    async fn find_by_id(&self, id: MediaId) -> DomainResult<Option<Media>>;
    async fn delete(&self, id: MediaId) -> DomainResult<()>;
    /// Newest first.
    async fn list(&self) -> DomainResult<Vec<Media>>;
}
