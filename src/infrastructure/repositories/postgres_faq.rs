// src/infrastructure/repositories/postgres_faq.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::faq::{Faq, FaqContent, FaqId, FaqRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresFaqRepository {
    pool: PgPool,
}

impl PostgresFaqRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FaqRow {
    id: Uuid,
    question: String,
    answer: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<FaqRow> for Faq {
    fn from(row: FaqRow) -> Self {
        Faq {
            id: FaqId::from(row.id),
            question: row.question,
            answer: row.answer,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl FaqRepository for PostgresFaqRepository {
    async fn insert(&self, content: FaqContent, now: DateTime<Utc>) -> DomainResult<Faq> {
        let row = sqlx::query_as::<_, FaqRow>(
            "INSERT INTO faqs (id, question, answer, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING id, question, answer, created_at, updated_at",
        )
        .bind(Uuid::from(FaqId::generate()))
        .bind(content.question())
        .bind(content.answer())
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: FaqId,
        content: FaqContent,
        now: DateTime<Utc>,
    ) -> DomainResult<Faq> {
        let row = sqlx::query_as::<_, FaqRow>(
            "UPDATE faqs SET question = $2, answer = $3, updated_at = $4 WHERE id = $1
             RETURNING id, question, answer, created_at, updated_at",
        )
        .bind(Uuid::from(id))
        .bind(content.question())
        .bind(content.answer())
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("faq not found".into()))?;

        Ok(row.into())
    }

    async fn delete(&self, id: FaqId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("faq not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: FaqId) -> DomainResult<Option<Faq>> {
        let row = sqlx::query_as::<_, FaqRow>(
            "SELECT id, question, answer, created_at, updated_at FROM faqs WHERE id = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> DomainResult<Vec<Faq>> {
        let rows = sqlx::query_as::<_, FaqRow>(
            "SELECT id, question, answer, created_at, updated_at FROM faqs
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
