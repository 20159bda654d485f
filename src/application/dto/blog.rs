use crate::domain::blog::{AuthorSummary, BlogPost};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<AuthorSummary> for AuthorDto {
    fn from(author: AuthorSummary) -> Self {
        Self {
            id: author.id.into(),
            name: author.name,
            email: author.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub published: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: Uuid,
    pub author: AuthorDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BlogPost> for BlogPostDto {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            excerpt: post.excerpt,
            content: post.content.into_inner(),
            cover_image: post.cover_image,
            published: post.published,
            published_at: post.published_at,
            author_id: post.author.id.into(),
            author: post.author.into(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
