use std::sync::Arc;

use crate::{
    application::{
        dto::{ClinicServiceDto, Paginated},
        error::ApplicationResult,
    },
    domain::{
        clinic_service::{ClinicServiceReadRepository, ServiceId},
        content::{PageRequest, Slug},
    },
};

pub struct ClinicServiceQueryService {
    read_repo: Arc<dyn ClinicServiceReadRepository>,
}

impl ClinicServiceQueryService {
    pub fn new(read_repo: Arc<dyn ClinicServiceReadRepository>) -> Self {
        Self { read_repo }
    }

    /// Public listing in display order.
    pub async fn list_services(&self) -> ApplicationResult<Vec<ClinicServiceDto>> {
        let services = self.read_repo.list_ordered().await?;
        Ok(services.into_iter().map(Into::into).collect())
    }

    pub async fn list_services_page(
        &self,
        page: u32,
        limit: u32,
    ) -> ApplicationResult<Paginated<ClinicServiceDto>> {
        let page = self
            .read_repo
            .list_page(PageRequest::new(page, limit))
            .await?;
        Ok(page.into())
    }

    pub async fn get_service_by_id(&self, id: &str) -> ApplicationResult<Option<ClinicServiceDto>> {
        let Ok(id) = ServiceId::parse(id) else {
            return Ok(None);
        };
        Ok(self.read_repo.find_by_id(id).await?.map(Into::into))
    }

    pub async fn get_service_by_slug(
        &self,
        slug: &str,
    ) -> ApplicationResult<Option<ClinicServiceDto>> {
        let Ok(slug) = Slug::new(slug) else {
            return Ok(None);
        };
        Ok(self.read_repo.find_by_slug(&slug).await?.map(Into::into))
    }
}
