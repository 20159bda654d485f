// src/infrastructure/repositories/postgres_media.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::media::{Media, MediaId, MediaRepository, NewMedia};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const MEDIA_COLUMNS: &str = "id, filename, original_name, mime_type, size, path, url, created_at";

#[derive(Clone)]
pub struct PostgresMediaRepository {
    pool: PgPool,
}

impl PostgresMediaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MediaRow {
    id: Uuid,
    filename: String,
    original_name: String,
    mime_type: String,
    size: i64,
    path: String,
    url: String,
    created_at: DateTime<Utc>,
}

impl From<MediaRow> for Media {
    fn from(row: MediaRow) -> Self {
        Media {
            id: MediaId::from(row.id),
            filename: row.filename,
            original_name: row.original_name,
            mime_type: row.mime_type,
            size: row.size,
            path: row.path,
            url: row.url,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl MediaRepository for PostgresMediaRepository {
    async fn insert(&self, media: NewMedia) -> DomainResult<Media> {
        let row = sqlx::query_as::<_, MediaRow>(&format!(
            "INSERT INTO media (id, filename, original_name, mime_type, size, path, url, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {MEDIA_COLUMNS}"
        ))
        .bind(Uuid::from(MediaId::generate()))
        .bind(&media.filename)
        .bind(&media.original_name)
        .bind(&media.mime_type)
        .bind(media.size)
        .bind(&media.path)
        .bind(&media.url)
        .bind(media.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: MediaId) -> DomainResult<Option<Media>> {
        let row = sqlx::query_as::<_, MediaRow>(&format!(
            "SELECT {MEDIA_COLUMNS} FROM media WHERE id = $1"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: MediaId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("media not found".into()));
        }
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<Media>> {
        let rows = sqlx::query_as::<_, MediaRow>(&format!(
            "SELECT {MEDIA_COLUMNS} FROM media ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
