// src/application/commands/blog/update.rs
use super::{BlogCommandService, service::parse_post_id};
use crate::{
    application::{
        dto::{AuthenticatedUser, BlogPostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        blog::{BlogPost, BlogPostUpdate},
        content::{Body, Title, optional_text},
    },
};

/// Only supplied fields change. A blank `excerpt` or `cover_image` clears it.
#[derive(Debug, Default)]
pub struct UpdateBlogPostCommand {
    pub id: String,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub published: Option<bool>,
}

impl BlogCommandService {
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateBlogPostCommand,
    ) -> ApplicationResult<BlogPostDto> {
        let id = parse_post_id(&command.id)?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("blog post not found"))?;

        let UpdateBlogPostCommand {
            id: _,
            title,
            excerpt,
            content,
            cover_image,
            published,
        } = command;

        let now = self.clock.now();
        let mut update = BlogPostUpdate::new(id, now);

        if let Some(title) = title {
            update = self.apply_title_update(&existing, Title::new(title)?, update).await?;
        }
        if let Some(excerpt) = excerpt {
            update = update.with_excerpt(optional_text(Some(excerpt)));
        }
        if let Some(content) = content {
            update = update.with_content(Body::new(content)?);
        }
        if let Some(cover_image) = cover_image {
            update = update.with_cover_image(optional_text(Some(cover_image)));
        }
        if let Some(published) = published {
            update = update.with_publish_state(existing.publish_transition(published, now));
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(
            post_id = %updated.id,
            slug = %updated.slug,
            editor = %actor.id,
            "blog post updated"
        );
        Ok(updated.into())
    }

    /// A title equal to the stored one leaves title and slug alone.
    async fn apply_title_update(
        &self,
        existing: &BlogPost,
        title: Title,
        update: BlogPostUpdate,
    ) -> ApplicationResult<BlogPostUpdate> {
        if title == existing.title {
            return Ok(update);
        }
        let slug = self.slug_service.claim(&title, Some(existing.id)).await?;
        Ok(update.with_title(title, Some(slug)))
    }
}
