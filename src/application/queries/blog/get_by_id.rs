use super::BlogQueryService;
use crate::{
    application::{dto::BlogPostDto, error::ApplicationResult},
    domain::blog::PostId,
};

pub struct GetBlogPostByIdQuery {
    pub id: String,
}

impl BlogQueryService {
    /// Drafts included; callers gate this behind authentication.
    pub async fn get_post_by_id(
        &self,
        query: GetBlogPostByIdQuery,
    ) -> ApplicationResult<Option<BlogPostDto>> {
        let Ok(id) = PostId::parse(&query.id) else {
            return Ok(None);
        };
        Ok(self.read_repo.find_by_id(id).await?.map(Into::into))
    }
}
