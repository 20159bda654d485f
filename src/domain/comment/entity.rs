// src/domain/comment/entity.rs
use crate::domain::content::Body;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

uuid_id!(CommentId);

const MAX_INITIALS_CHARS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Initials(String);

impl Initials {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("initials cannot be empty".into()));
        }
        if value.chars().count() > MAX_INITIALS_CHARS {
            return Err(DomainError::Validation(format!(
                "initials must be at most {MAX_INITIALS_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: i64) -> DomainResult<Self> {
        match u8::try_from(value) {
            Ok(v @ 1..=5) => Ok(Self(v)),
            _ => Err(DomainError::Validation(
                "rating must be between 1 and 5".into(),
            )),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub initials: Initials,
    pub rating: Rating,
    pub content: Body,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub initials: Initials,
    pub rating: Rating,
    pub content: Body,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommentUpdate {
    pub id: CommentId,
    pub initials: Option<Initials>,
    pub rating: Option<Rating>,
    pub content: Option<Body>,
    pub is_active: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert!(Rating::new(-1).is_err());
        assert_eq!(Rating::new(5).unwrap().value(), 5);
    }

    #[test]
    fn initials_are_trimmed_and_bounded() {
        assert_eq!(Initials::new(" A.K. ").unwrap().as_str(), "A.K.");
        assert!(Initials::new("").is_err());
        assert!(Initials::new("ABCDEFGHI").is_err());
    }
}
