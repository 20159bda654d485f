use crate::domain::comment::entity::{Comment, CommentId, CommentUpdate, NewComment};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    /// Newest first; hidden comments are skipped unless `include_hidden`.
    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<Comment>>;
}
