use super::BlogQueryService;
use crate::{
    application::dto::{AuthenticatedUser, BlogPostDto},
    application::error::ApplicationResult,
    domain::content::Slug,
};

pub struct GetBlogPostBySlugQuery {
    pub slug: String,
}

impl BlogQueryService {
    /// Drafts are only visible to an authenticated admin; anyone else gets
    /// the same absence as for an unknown slug.
    pub async fn get_post_by_slug(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetBlogPostBySlugQuery,
    ) -> ApplicationResult<Option<BlogPostDto>> {
        let Ok(slug) = Slug::new(query.slug) else {
            return Ok(None);
        };
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|post| post.published || actor.is_some());
        Ok(post.map(Into::into))
    }
}
