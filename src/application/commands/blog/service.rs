// src/application/commands/blog/service.rs
use std::sync::Arc;

use crate::{
    application::{error::ApplicationError, ports::time::Clock},
    domain::{
        blog::{BlogPostReadRepository, BlogPostWriteRepository, PostId},
        content::SlugService,
    },
};

pub struct BlogCommandService {
    pub(super) write_repo: Arc<dyn BlogPostWriteRepository>,
    pub(super) read_repo: Arc<dyn BlogPostReadRepository>,
    pub(super) slug_service: Arc<SlugService<dyn BlogPostReadRepository>>,
    pub(super) clock: Arc<dyn Clock>,
}

impl BlogCommandService {
    pub fn new(
        write_repo: Arc<dyn BlogPostWriteRepository>,
        read_repo: Arc<dyn BlogPostReadRepository>,
        slug_service: Arc<SlugService<dyn BlogPostReadRepository>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }
}

/// A malformed id cannot name an existing post, so it reads as not found.
pub(super) fn parse_post_id(raw: &str) -> Result<PostId, ApplicationError> {
    PostId::parse(raw).map_err(|_| ApplicationError::not_found("blog post not found"))
}
