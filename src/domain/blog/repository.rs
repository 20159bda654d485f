use crate::domain::blog::entity::{BlogPost, BlogPostUpdate, NewBlogPost};
use crate::domain::blog::value_objects::PostId;
use crate::domain::content::{Page, PageRequest, Slug, SlugIndex};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostListFilter {
    /// Published posts, newest `published_at` first.
    Published,
    /// Every post, newest `created_at` first.
    All,
}

#[async_trait]
pub trait BlogPostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewBlogPost) -> DomainResult<BlogPost>;
    async fn update(&self, update: BlogPostUpdate) -> DomainResult<BlogPost>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait BlogPostReadRepository: SlugIndex<PostId> {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<BlogPost>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<BlogPost>>;
    async fn list_page(
        &self,
        filter: PostListFilter,
        page: PageRequest,
    ) -> DomainResult<Page<BlogPost>>;
}
