pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{BlogPost, BlogPostUpdate, NewBlogPost, PublishStateUpdate, published_at_after};
pub use repository::{BlogPostReadRepository, BlogPostWriteRepository, PostListFilter};
pub use value_objects::{AuthorSummary, PostId};
