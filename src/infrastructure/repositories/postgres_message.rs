// src/infrastructure/repositories/postgres_message.rs
use super::map_sqlx;
use crate::domain::content::Body;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::message::{
    ContactMessage, ContactMessageRepository, MessageId, NewContactMessage,
};
use crate::domain::user::Email;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresContactMessageRepository {
    pool: PgPool,
}

impl PostgresContactMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MessageRow {
    id: Uuid,
    name: String,
    email: String,
    phone: Option<String>,
    message: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<MessageRow> for ContactMessage {
    type Error = DomainError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        Ok(ContactMessage {
            id: MessageId::from(row.id),
            name: row.name,
            email: Email::new(row.email)?,
            phone: row.phone,
            message: Body::named(row.message, "message")?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ContactMessageRepository for PostgresContactMessageRepository {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let row = sqlx::query_as::<_, MessageRow>(
            "INSERT INTO messages (id, name, email, phone, message, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, name, email, phone, message, created_at",
        )
        .bind(Uuid::from(MessageId::generate()))
        .bind(&message.name)
        .bind(message.email.as_str())
        .bind(&message.phone)
        .bind(message.message.as_str())
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ContactMessage::try_from(row)
    }

    async fn list(&self) -> DomainResult<Vec<ContactMessage>> {
        let rows = sqlx::query_as::<_, MessageRow>(
            "SELECT id, name, email, phone, message, created_at FROM messages
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ContactMessage::try_from).collect()
    }
}
