// src/infrastructure/repositories/postgres_blog.rs
use super::error::{count_to_u64, offset_to_i64};
use super::map_sqlx;
use crate::domain::blog::{
    AuthorSummary, BlogPost, BlogPostReadRepository, BlogPostUpdate, BlogPostWriteRepository,
    NewBlogPost, PostId, PostListFilter,
};
use crate::domain::content::{Body, Page, PageRequest, Slug, SlugIndex, Title};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

/// Columns of a post joined with its author. Expects the post relation to be
/// aliased `p` and `users` to be aliased `u`.
const POST_SELECT: &str = "SELECT p.id, p.title, p.slug, p.excerpt, p.content, p.cover_image, \
     p.published, p.published_at, p.author_id, u.name AS author_name, u.email AS author_email, \
     p.created_at, p.updated_at";

#[derive(Clone)]
pub struct PostgresBlogPostWriteRepository {
    pool: PgPool,
}

impl PostgresBlogPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresBlogPostReadRepository {
    pool: PgPool,
}

impl PostgresBlogPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    slug: String,
    excerpt: Option<String>,
    content: String,
    cover_image: Option<String>,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    author_id: Uuid,
    author_name: String,
    author_email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for BlogPost {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(BlogPost {
            id: PostId::from(row.id),
            title: Title::new(row.title)?,
            slug: Slug::new(row.slug)?,
            excerpt: row.excerpt,
            content: Body::new(row.content)?,
            cover_image: row.cover_image,
            published: row.published,
            published_at: row.published_at,
            author: AuthorSummary {
                id: UserId::from(row.author_id),
                name: row.author_name,
                email: row.author_email,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl BlogPostWriteRepository for PostgresBlogPostWriteRepository {
    async fn insert(&self, post: NewBlogPost) -> DomainResult<BlogPost> {
        let NewBlogPost {
            title,
            slug,
            excerpt,
            content,
            cover_image,
            published,
            published_at,
            author_id,
            created_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "WITH p AS (
                INSERT INTO blog_posts (id, title, slug, excerpt, content, cover_image,
                                        published, published_at, author_id, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
                RETURNING *
             )
             {POST_SELECT} FROM p JOIN users u ON u.id = p.author_id"
        ))
        .bind(Uuid::from(PostId::generate()))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(excerpt)
        .bind(content.as_str())
        .bind(cover_image)
        .bind(published)
        .bind(published_at)
        .bind(Uuid::from(author_id))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        BlogPost::try_from(row)
    }

    async fn update(&self, update: BlogPostUpdate) -> DomainResult<BlogPost> {
        let BlogPostUpdate {
            id,
            title,
            slug,
            excerpt,
            content,
            cover_image,
            publish_state,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("WITH p AS (UPDATE blog_posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt);
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }
        if let Some(cover_image) = cover_image {
            builder.push(", cover_image = ");
            builder.push_bind(cover_image);
        }
        if let Some(state) = publish_state {
            builder.push(", published = ");
            builder.push_bind(state.published);
            builder.push(", published_at = ");
            builder.push_bind(state.published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(Uuid::from(id));
        builder.push(" RETURNING *) ");
        builder.push(POST_SELECT);
        builder.push(" FROM p JOIN users u ON u.id = p.author_id");

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("blog post not found".into()))?;

        BlogPost::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("blog post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SlugIndex<PostId> for PostgresBlogPostReadRepository {
    async fn slug_owner(&self, slug: &Slug) -> DomainResult<Option<PostId>> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM blog_posts WHERE slug = $1")
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map(|id| id.map(PostId::from))
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl BlogPostReadRepository for PostgresBlogPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<BlogPost>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "{POST_SELECT} FROM blog_posts p JOIN users u ON u.id = p.author_id WHERE p.id = $1"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(BlogPost::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<BlogPost>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "{POST_SELECT} FROM blog_posts p JOIN users u ON u.id = p.author_id WHERE p.slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(BlogPost::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: PostListFilter,
        page: PageRequest,
    ) -> DomainResult<Page<BlogPost>> {
        let (condition, ordering) = match filter {
            PostListFilter::Published => (
                " WHERE p.published = TRUE",
                " ORDER BY p.published_at DESC, p.created_at DESC, p.id DESC",
            ),
            PostListFilter::All => ("", " ORDER BY p.created_at DESC, p.id DESC"),
        };

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM blog_posts p{condition}"
        ))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "{POST_SELECT} FROM blog_posts p JOIN users u ON u.id = p.author_id\
             {condition}{ordering} LIMIT $1 OFFSET $2"
        ))
        .bind(i64::from(page.limit()))
        .bind(offset_to_i64(page.offset()))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(BlogPost::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Page::new(items, count_to_u64(total), page))
    }
}
