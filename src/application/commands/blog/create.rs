// src/application/commands/blog/create.rs
use super::BlogCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BlogPostDto},
        error::ApplicationResult,
    },
    domain::{
        blog::{NewBlogPost, PostId, published_at_after},
        content::{Body, Title, optional_text},
    },
};

pub struct CreateBlogPostCommand {
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub published: bool,
}

impl CreateBlogPostCommand {
    pub fn builder() -> CreateBlogPostCommandBuilder {
        CreateBlogPostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateBlogPostCommandBuilder {
    title: Option<String>,
    excerpt: Option<String>,
    content: Option<String>,
    cover_image: Option<String>,
    published: bool,
}

impl CreateBlogPostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn cover_image(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = Some(cover_image.into());
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub fn build(self) -> Result<CreateBlogPostCommand, &'static str> {
        Ok(CreateBlogPostCommand {
            title: self.title.ok_or("title is required")?,
            excerpt: self.excerpt,
            content: self.content.ok_or("content is required")?,
            cover_image: self.cover_image,
            published: self.published,
        })
    }
}

impl BlogCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreateBlogPostCommand,
    ) -> ApplicationResult<BlogPostDto> {
        let title = Title::new(command.title)?;
        let content = Body::new(command.content)?;
        let slug = self.slug_service.claim(&title, None::<PostId>).await?;
        let now = self.clock.now();

        let new_post = NewBlogPost {
            title,
            slug,
            excerpt: optional_text(command.excerpt),
            content,
            cover_image: optional_text(command.cover_image),
            published: command.published,
            published_at: published_at_after(None, command.published, now),
            author_id: actor.id,
            created_at: now,
        };

        let created = self.write_repo.insert(new_post).await?;
        tracing::info!(post_id = %created.id, slug = %created.slug, "blog post created");
        Ok(created.into())
    }
}
