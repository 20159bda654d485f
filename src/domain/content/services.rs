// src/domain/content/services.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::util::SlugGenerator;
use crate::domain::content::value_objects::{Slug, Title};
use crate::domain::errors::{DomainError, DomainResult};

/// Lookup of the item currently holding a slug within one resource type.
#[async_trait]
pub trait SlugIndex<Id>: Send + Sync {
    async fn slug_owner(&self, slug: &Slug) -> DomainResult<Option<Id>>;
}

/// Domain service deriving slugs from titles and rejecting collisions.
///
/// The check is read-then-write; the unique index on the table remains the
/// final arbiter and its violation surfaces as the same `Conflict`.
pub struct SlugService<R: ?Sized> {
    index: Arc<R>,
    generator: Arc<dyn SlugGenerator>,
    resource: &'static str,
}

impl<R: ?Sized> SlugService<R> {
    pub fn new(index: Arc<R>, generator: Arc<dyn SlugGenerator>, resource: &'static str) -> Self {
        Self {
            index,
            generator,
            resource,
        }
    }

    pub fn derive(&self, title: &Title) -> DomainResult<Slug> {
        Slug::new(self.generator.slugify(title.as_str())).map_err(|_| {
            DomainError::Validation("title must contain at least one letter or digit".into())
        })
    }

    /// Derive the slug for `title` and make sure nobody but `current` holds it.
    pub async fn claim<Id>(&self, title: &Title, current: Option<Id>) -> DomainResult<Slug>
    where
        R: SlugIndex<Id>,
        Id: PartialEq + Send + Sync,
    {
        let slug = self.derive(title)?;
        match self.index.slug_owner(&slug).await? {
            Some(owner) if current.as_ref() == Some(&owner) => Ok(slug),
            Some(_) => Err(DomainError::Conflict(format!(
                "a {} with this title already exists",
                self.resource
            ))),
            None => Ok(slug),
        }
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }
}
