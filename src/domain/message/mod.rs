// src/domain/message/mod.rs
use crate::domain::content::Body;
use crate::domain::errors::DomainResult;
use crate::domain::user::Email;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

uuid_id!(MessageId);

/// A message left through the public contact form.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: MessageId,
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub message: Body,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub message: Body,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage>;
    /// Newest first.
    async fn list(&self) -> DomainResult<Vec<ContactMessage>>;
}
