use super::BlogQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BlogPostDto, Paginated},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{blog::PostListFilter, content::PageRequest},
};

#[derive(Debug, Default)]
pub struct ListBlogPostsQuery {
    pub page: u32,
    pub limit: u32,
    pub include_drafts: bool,
}

impl BlogQueryService {
    pub async fn list_posts(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListBlogPostsQuery,
    ) -> ApplicationResult<Paginated<BlogPostDto>> {
        let filter = if query.include_drafts {
            if actor.is_none() {
                return Err(ApplicationError::unauthorized(
                    "authentication required for draft access",
                ));
            }
            PostListFilter::All
        } else {
            PostListFilter::Published
        };

        let page = self
            .read_repo
            .list_page(filter, PageRequest::new(query.page, query.limit))
            .await?;
        Ok(page.into())
    }
}
