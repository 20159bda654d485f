// src/domain/blog/entity.rs
use crate::domain::blog::value_objects::{AuthorSummary, PostId};
use crate::domain::content::{Body, Slug, Title};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct BlogPost {
    pub id: PostId,
    pub title: Title,
    pub slug: Slug,
    pub excerpt: Option<String>,
    pub content: Body,
    pub cover_image: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub author: AuthorSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Publish state resulting from writing `published` onto this post.
    pub fn publish_transition(&self, published: bool, now: DateTime<Utc>) -> PublishStateUpdate {
        PublishStateUpdate {
            published,
            published_at: published_at_after(self.published_at, published, now),
        }
    }
}

/// `published_at` after `published` is written.
///
/// Publishing stamps `now` only when no timestamp exists yet, so the original
/// publication time survives later edits. Unpublishing always clears it.
pub fn published_at_after(
    current: Option<DateTime<Utc>>,
    published: bool,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    if published {
        current.or(Some(now))
    } else {
        None
    }
}

#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: Title,
    pub slug: Slug,
    pub excerpt: Option<String>,
    pub content: Body,
    pub cover_image: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishStateUpdate {
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

/// Partial update. `None` leaves the column untouched; for nullable columns
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone)]
pub struct BlogPostUpdate {
    pub id: PostId,
    pub title: Option<Title>,
    pub slug: Option<Slug>,
    pub excerpt: Option<Option<String>>,
    pub content: Option<Body>,
    pub cover_image: Option<Option<String>>,
    pub publish_state: Option<PublishStateUpdate>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            excerpt: None,
            content: None,
            cover_image: None,
            publish_state: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: Title, slug: Option<Slug>) -> Self {
        self.title = Some(title);
        self.slug = slug;
        self
    }

    pub fn with_excerpt(mut self, excerpt: Option<String>) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_content(mut self, content: Body) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_cover_image(mut self, cover_image: Option<String>) -> Self {
        self.cover_image = Some(cover_image);
        self
    }

    pub fn with_publish_state(mut self, state: PublishStateUpdate) -> Self {
        self.publish_state = Some(state);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn draft(now: DateTime<Utc>) -> BlogPost {
        BlogPost {
            id: PostId::generate(),
            title: Title::new("Title").unwrap(),
            slug: Slug::new("title").unwrap(),
            excerpt: None,
            content: Body::new("content").unwrap(),
            cover_image: None,
            published: false,
            published_at: None,
            author: AuthorSummary {
                id: UserId::generate(),
                name: "Admin".into(),
                email: "admin@clinic.example".into(),
            },
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn publishing_a_draft_stamps_now() {
        let now = Utc::now();
        let state = draft(now).publish_transition(true, now);
        assert!(state.published);
        assert_eq!(state.published_at, Some(now));
    }

    #[test]
    fn republishing_keeps_original_timestamp() {
        let first = Utc::now();
        let mut post = draft(first);
        post.published = true;
        post.published_at = Some(first);

        let later = first + Duration::days(3);
        let state = post.publish_transition(true, later);
        assert_eq!(state.published_at, Some(first));
    }

    #[test]
    fn unpublishing_clears_timestamp() {
        let now = Utc::now();
        let mut post = draft(now);
        post.published = true;
        post.published_at = Some(now);

        let state = post.publish_transition(false, now + Duration::hours(1));
        assert!(!state.published);
        assert_eq!(state.published_at, None);
    }

    #[test]
    fn creation_rule_matches_transition_rule() {
        let now = Utc::now();
        assert_eq!(published_at_after(None, true, now), Some(now));
        assert_eq!(published_at_after(None, false, now), None);
    }

    #[test]
    fn update_distinguishes_untouched_from_cleared() {
        let now = Utc::now();
        let post = draft(now);
        let later = now + Duration::minutes(5);

        let update = BlogPostUpdate::new(post.id, later)
            .with_content(Body::new("new content").unwrap())
            .with_cover_image(None);

        assert_eq!(update.content.as_ref().map(Body::as_str), Some("new content"));
        assert_eq!(update.cover_image, Some(None));
        assert!(update.excerpt.is_none());
        assert!(update.title.is_none() && update.slug.is_none());
        assert_eq!(update.updated_at, later);
    }
}
