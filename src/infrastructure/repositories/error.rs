use crate::domain::errors::DomainError;

const CNT_POST_SLUG: &str = "blog_posts_slug_key";
const CNT_POST_AUTHOR: &str = "blog_posts_author_id_fkey";
const CNT_POST_PUBLISHED_CHECK: &str = "blog_posts_published_at_chk";
const CNT_SERVICE_SLUG: &str = "services_slug_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_COMMENT_RATING: &str = "comments_rating_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_SLUG => {
                        DomainError::Conflict("a post with this title already exists".into())
                    }
                    CNT_SERVICE_SLUG => {
                        DomainError::Conflict("a service with this title already exists".into())
                    }
                    CNT_USER_EMAIL => {
                        DomainError::Conflict("a user with this email already exists".into())
                    }
                    CNT_POST_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_POST_PUBLISHED_CHECK => DomainError::Validation(
                        "published posts require a publication date".into(),
                    ),
                    CNT_COMMENT_RATING => {
                        DomainError::Validation("rating must be between 1 and 5".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Row counts come back as `BIGINT`.
pub(super) fn count_to_u64(count: i64) -> u64 {
    u64::try_from(count).unwrap_or_default()
}

pub(super) fn offset_to_i64(offset: u64) -> i64 {
    i64::try_from(offset).unwrap_or(i64::MAX)
}
