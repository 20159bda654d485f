// tests/support/mocks/content_repos.rs
//! スラグ一意制約をデータベースと同じく再現するインメモリストア
use async_trait::async_trait;
use clinic_cms::domain::blog::{
    AuthorSummary, BlogPost, BlogPostReadRepository, BlogPostUpdate, BlogPostWriteRepository,
    NewBlogPost, PostId, PostListFilter,
};
use clinic_cms::domain::clinic_service::{
    ClinicService, ClinicServiceReadRepository, ClinicServiceUpdate,
    ClinicServiceWriteRepository, NewClinicService, ServiceId,
};
use clinic_cms::domain::content::{Page, PageRequest, Slug, SlugIndex};
use clinic_cms::domain::errors::{DomainError, DomainResult};
use clinic_cms::domain::user::UserRepository;
use std::sync::{Arc, Mutex};

use super::user_repo::InMemoryUsers;

fn page_of<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let offset = usize::try_from(request.offset()).unwrap();
    let limit = request.limit() as usize;
    let slice = items.iter().skip(offset).take(limit).cloned().collect();
    Page::new(slice, items.len() as u64, request)
}

/* -------------------------------- Blog posts -------------------------------- */

pub struct InMemoryBlogPosts {
    posts: Mutex<Vec<BlogPost>>,
    users: Arc<InMemoryUsers>,
}

impl InMemoryBlogPosts {
    pub fn new(users: Arc<InMemoryUsers>) -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            users,
        }
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn get(&self, id: PostId) -> Option<BlogPost> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }
}

/// 指定された列だけを書き換える (UPDATE 文と同じ)
fn apply_post_update(update: &BlogPostUpdate, post: &mut BlogPost) {
    if let Some(title) = &update.title {
        post.title = title.clone();
    }
    if let Some(slug) = &update.slug {
        post.slug = slug.clone();
    }
    if let Some(excerpt) = &update.excerpt {
        post.excerpt = excerpt.clone();
    }
    if let Some(content) = &update.content {
        post.content = content.clone();
    }
    if let Some(cover_image) = &update.cover_image {
        post.cover_image = cover_image.clone();
    }
    if let Some(state) = update.publish_state {
        post.published = state.published;
        post.published_at = state.published_at;
    }
    post.updated_at = update.updated_at;
}

fn post_slug_conflict() -> DomainError {
    DomainError::Conflict("a post with this title already exists".into())
}

#[async_trait]
impl BlogPostWriteRepository for InMemoryBlogPosts {
    async fn insert(&self, post: NewBlogPost) -> DomainResult<BlogPost> {
        let author = self
            .users
            .find_by_id(post.author_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("author not found".into()))?;

        let mut posts = self.posts.lock().unwrap();
        if posts.iter().any(|p| p.slug == post.slug) {
            return Err(post_slug_conflict());
        }
        let created = BlogPost {
            id: PostId::generate(),
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            cover_image: post.cover_image,
            published: post.published,
            published_at: post.published_at,
            author: AuthorSummary {
                id: author.id,
                name: author.name.to_string(),
                email: author.email.to_string(),
            },
            created_at: post.created_at,
            updated_at: post.created_at,
        };
        posts.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: BlogPostUpdate) -> DomainResult<BlogPost> {
        let mut posts = self.posts.lock().unwrap();
        if let Some(slug) = &update.slug {
            if posts.iter().any(|p| &p.slug == slug && p.id != update.id) {
                return Err(post_slug_conflict());
            }
        }
        let post = posts
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("blog post not found".into()))?;
        apply_post_update(&update, post);
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(DomainError::NotFound("blog post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SlugIndex<PostId> for InMemoryBlogPosts {
    async fn slug_owner(&self, slug: &Slug) -> DomainResult<Option<PostId>> {
        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().find(|p| &p.slug == slug).map(|p| p.id))
    }
}

#[async_trait]
impl BlogPostReadRepository for InMemoryBlogPosts {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<BlogPost>> {
        Ok(self.get(id))
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<BlogPost>> {
        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().find(|p| &p.slug == slug).cloned())
    }

    async fn list_page(
        &self,
        filter: PostListFilter,
        page: PageRequest,
    ) -> DomainResult<Page<BlogPost>> {
        let mut posts: Vec<BlogPost> = self.posts.lock().unwrap().clone();
        match filter {
            PostListFilter::Published => {
                posts.retain(|p| p.published);
                posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
            }
            PostListFilter::All => posts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }
        Ok(page_of(&posts, page))
    }
}

/* -------------------------------- Clinic services -------------------------------- */

#[derive(Default)]
pub struct InMemoryClinicServices {
    services: Mutex<Vec<ClinicService>>,
}

impl InMemoryClinicServices {
    pub fn len(&self) -> usize {
        self.services.lock().unwrap().len()
    }
}

fn apply_service_update(update: &ClinicServiceUpdate, service: &mut ClinicService) {
    if let Some(title) = &update.title {
        service.title = title.clone();
    }
    if let Some(slug) = &update.slug {
        service.slug = slug.clone();
    }
    if let Some(description) = &update.description {
        service.description = description.clone();
    }
    if let Some(content) = &update.content {
        service.content = content.clone();
    }
    if let Some(icon) = &update.icon {
        service.icon = icon.clone();
    }
    if let Some(image) = &update.image {
        service.image = image.clone();
    }
    if let Some(order) = update.order {
        service.order = order;
    }
    service.updated_at = update.updated_at;
}

fn service_slug_conflict() -> DomainError {
    DomainError::Conflict("a service with this title already exists".into())
}

#[async_trait]
impl ClinicServiceWriteRepository for InMemoryClinicServices {
    async fn insert(&self, service: NewClinicService) -> DomainResult<ClinicService> {
        let mut services = self.services.lock().unwrap();
        if services.iter().any(|s| s.slug == service.slug) {
            return Err(service_slug_conflict());
        }
        let created = ClinicService {
            id: ServiceId::generate(),
            title: service.title,
            slug: service.slug,
            description: service.description,
            content: service.content,
            icon: service.icon,
            image: service.image,
            order: service.order,
            created_at: service.created_at,
            updated_at: service.created_at,
        };
        services.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: ClinicServiceUpdate) -> DomainResult<ClinicService> {
        let mut services = self.services.lock().unwrap();
        if let Some(slug) = &update.slug {
            if services.iter().any(|s| &s.slug == slug && s.id != update.id) {
                return Err(service_slug_conflict());
            }
        }
        let service = services
            .iter_mut()
            .find(|s| s.id == update.id)
            .ok_or_else(|| DomainError::NotFound("service not found".into()))?;
        apply_service_update(&update, service);
        Ok(service.clone())
    }

    async fn delete(&self, id: ServiceId) -> DomainResult<()> {
        let mut services = self.services.lock().unwrap();
        let before = services.len();
        services.retain(|s| s.id != id);
        if services.len() == before {
            return Err(DomainError::NotFound("service not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SlugIndex<ServiceId> for InMemoryClinicServices {
    async fn slug_owner(&self, slug: &Slug) -> DomainResult<Option<ServiceId>> {
        let services = self.services.lock().unwrap();
        Ok(services.iter().find(|s| &s.slug == slug).map(|s| s.id))
    }
}

#[async_trait]
impl ClinicServiceReadRepository for InMemoryClinicServices {
    async fn find_by_id(&self, id: ServiceId) -> DomainResult<Option<ClinicService>> {
        let services = self.services.lock().unwrap();
        Ok(services.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<ClinicService>> {
        let services = self.services.lock().unwrap();
        Ok(services.iter().find(|s| &s.slug == slug).cloned())
    }

    async fn list_ordered(&self) -> DomainResult<Vec<ClinicService>> {
        let mut services = self.services.lock().unwrap().clone();
        services.sort_by(|a, b| (a.order, a.created_at).cmp(&(b.order, b.created_at)));
        Ok(services)
    }

    async fn list_page(&self, page: PageRequest) -> DomainResult<Page<ClinicService>> {
        let mut services = self.services.lock().unwrap().clone();
        services.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(page_of(&services, page))
    }
}

/* -------------------------------- Stale slug index -------------------------------- */

/// どのスラグも空いていると答える読み取り側。事前チェックをすり抜けた重複を
/// ストアの一意制約だけで止められるかを確かめるのに使う
pub struct StaleSlugIndex<R>(pub Arc<R>);

#[async_trait]
impl<R, Id> SlugIndex<Id> for StaleSlugIndex<R>
where
    R: Send + Sync,
    Id: Send + 'static,
{
    async fn slug_owner(&self, _slug: &Slug) -> DomainResult<Option<Id>> {
        Ok(None)
    }
}

#[async_trait]
impl BlogPostReadRepository for StaleSlugIndex<InMemoryBlogPosts> {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<BlogPost>> {
        self.0.find_by_id(id).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<BlogPost>> {
        self.0.find_by_slug(slug).await
    }

    async fn list_page(
        &self,
        filter: PostListFilter,
        page: PageRequest,
    ) -> DomainResult<Page<BlogPost>> {
        self.0.list_page(filter, page).await
    }
}

#[async_trait]
impl ClinicServiceReadRepository for StaleSlugIndex<InMemoryClinicServices> {
    async fn find_by_id(&self, id: ServiceId) -> DomainResult<Option<ClinicService>> {
        self.0.find_by_id(id).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<ClinicService>> {
        self.0.find_by_slug(slug).await
    }

    async fn list_ordered(&self) -> DomainResult<Vec<ClinicService>> {
        self.0.list_ordered().await
    }

    async fn list_page(&self, page: PageRequest) -> DomainResult<Page<ClinicService>> {
        self.0.list_page(page).await
    }
}
