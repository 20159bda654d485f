// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::comment::{
    Comment, CommentId, CommentRepository, CommentUpdate, Initials, NewComment, Rating,
};
use crate::domain::content::Body;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const COMMENT_COLUMNS: &str = "id, initials, rating, content, is_active, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: Uuid,
    initials: String,
    rating: i16,
    content: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::from(row.id),
            initials: Initials::new(row.initials)?,
            rating: Rating::new(i64::from(row.rating))?,
            content: Body::new(row.content)?,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO comments (id, initials, rating, content, is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(Uuid::from(CommentId::generate()))
        .bind(comment.initials.as_str())
        .bind(i16::from(comment.rating.value()))
        .bind(comment.content.as_str())
        .bind(comment.is_active)
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE comments SET updated_at = ");
        builder.push_bind(update.updated_at);

        if let Some(initials) = update.initials {
            builder.push(", initials = ");
            builder.push_bind(initials.as_str().to_string());
        }
        if let Some(rating) = update.rating {
            builder.push(", rating = ");
            builder.push_bind(i16::from(rating.value()));
        }
        if let Some(content) = update.content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }
        if let Some(is_active) = update.is_active {
            builder.push(", is_active = ");
            builder.push_bind(is_active);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(Uuid::from(update.id));
        builder.push(" RETURNING ");
        builder.push(COMMENT_COLUMNS);

        let row = builder
            .build_query_as::<CommentRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;

        Comment::try_from(row)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE $1 OR is_active
             ORDER BY created_at DESC"
        ))
        .bind(include_hidden)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
