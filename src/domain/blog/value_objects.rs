use crate::domain::user::UserId;

uuid_id!(
    /// Identifier of a blog post.
    PostId
);

/// Author relation expanded on every post read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSummary {
    pub id: UserId,
    pub name: String,
    pub email: String,
}
