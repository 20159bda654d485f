// src/application/commands/comments.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        comment::{CommentId, CommentRepository, CommentUpdate, Initials, NewComment, Rating},
        content::Body,
    },
};

pub struct SubmitCommentCommand {
    pub initials: String,
    pub rating: i64,
    pub content: String,
    /// Ignored for public submissions.
    pub is_active: Option<bool>,
}

#[derive(Debug, Default)]
pub struct UpdateCommentCommand {
    pub id: String,
    pub initials: Option<String>,
    pub rating: Option<i64>,
    pub content: Option<String>,
    pub is_active: Option<bool>,
}

pub struct CommentCommandService {
    repo: Arc<dyn CommentRepository>,
    clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(repo: Arc<dyn CommentRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Anonymous visitor submission. Comments go live immediately.
    pub async fn submit_comment(&self, command: SubmitCommentCommand) -> ApplicationResult<CommentDto> {
        let new_comment = self.new_comment(command, true)?;
        let comment = self.repo.insert(new_comment).await?;
        tracing::info!(comment_id = %comment.id, "public comment submitted");
        Ok(comment.into())
    }

    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: SubmitCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let is_active = command.is_active.unwrap_or(true);
        let new_comment = self.new_comment(command, is_active)?;
        let comment = self.repo.insert(new_comment).await?;
        tracing::info!(comment_id = %comment.id, editor = %actor.id, "comment created");
        Ok(comment.into())
    }

    pub async fn update_comment(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let id = self.existing(&command.id).await?;
        let update = CommentUpdate {
            id,
            initials: command.initials.map(Initials::new).transpose()?,
            rating: command.rating.map(Rating::new).transpose()?,
            content: command.content.map(Body::new).transpose()?,
            is_active: command.is_active,
            updated_at: self.clock.now(),
        };
        let comment = self.repo.update(update).await?;
        tracing::info!(
            comment_id = %comment.id,
            active = comment.is_active,
            editor = %actor.id,
            "comment updated"
        );
        Ok(comment.into())
    }

    pub async fn delete_comment(&self, actor: &AuthenticatedUser, id: &str) -> ApplicationResult<()> {
        let id = self.existing(id).await?;
        self.repo.delete(id).await?;
        tracing::info!(comment_id = %id, editor = %actor.id, "comment deleted");
        Ok(())
    }

    fn new_comment(&self, command: SubmitCommentCommand, is_active: bool) -> ApplicationResult<NewComment> {
        Ok(NewComment {
            initials: Initials::new(command.initials)?,
            rating: Rating::new(command.rating)?,
            content: Body::new(command.content)?,
            is_active,
            created_at: self.clock.now(),
        })
    }

    async fn existing(&self, raw: &str) -> ApplicationResult<CommentId> {
        let not_found = || ApplicationError::not_found("comment not found");
        let id = CommentId::parse(raw).map_err(|_| not_found())?;
        self.repo.find_by_id(id).await?.ok_or_else(not_found)?;
        Ok(id)
    }
}
