// src/application/commands/blog/delete.rs
use super::{BlogCommandService, service::parse_post_id};
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

pub struct DeleteBlogPostCommand {
    pub id: String,
}

impl BlogCommandService {
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteBlogPostCommand,
    ) -> ApplicationResult<()> {
        let id = parse_post_id(&command.id)?;
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("blog post not found"))?;

        self.write_repo.delete(id).await?;
        tracing::info!(post_id = %id, slug = %post.slug, editor = %actor.id, "blog post deleted");
        Ok(())
    }
}
