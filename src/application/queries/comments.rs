use std::sync::Arc;

use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::comment::CommentRepository,
};

pub struct CommentQueryService {
    repo: Arc<dyn CommentRepository>,
}

impl CommentQueryService {
    pub fn new(repo: Arc<dyn CommentRepository>) -> Self {
        Self { repo }
    }

    /// `include_hidden` is for the moderation screen only.
    pub async fn list_comments(&self, include_hidden: bool) -> ApplicationResult<Vec<CommentDto>> {
        let comments = self.repo.list(include_hidden).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
