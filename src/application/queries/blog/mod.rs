mod get_by_id;
mod get_by_slug;
mod list;
mod service;

pub use get_by_id::GetBlogPostByIdQuery;
pub use get_by_slug::GetBlogPostBySlugQuery;
pub use list::ListBlogPostsQuery;
pub use service::BlogQueryService;
