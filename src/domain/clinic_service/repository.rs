use crate::domain::clinic_service::entity::{
    ClinicService, ClinicServiceUpdate, NewClinicService, ServiceId,
};
use crate::domain::content::{Page, PageRequest, Slug, SlugIndex};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ClinicServiceWriteRepository: Send + Sync {
    async fn insert(&self, service: NewClinicService) -> DomainResult<ClinicService>;
    async fn update(&self, update: ClinicServiceUpdate) -> DomainResult<ClinicService>;
    async fn delete(&self, id: ServiceId) -> DomainResult<()>;
}

#[async_trait]
pub trait ClinicServiceReadRepository: SlugIndex<ServiceId> {
    async fn find_by_id(&self, id: ServiceId) -> DomainResult<Option<ClinicService>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<ClinicService>>;
    /// Every service in display order (`order` ascending, oldest first on ties).
    async fn list_ordered(&self) -> DomainResult<Vec<ClinicService>>;
    /// Newest first, for the admin screens.
    async fn list_page(&self, page: PageRequest) -> DomainResult<Page<ClinicService>>;
}
