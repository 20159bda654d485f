// src/application/commands/services/service.rs
use std::sync::Arc;

use crate::{
    application::{error::ApplicationError, ports::time::Clock},
    domain::{
        clinic_service::{ClinicServiceReadRepository, ClinicServiceWriteRepository, ServiceId},
        content::SlugService,
    },
};

pub struct ClinicServiceCommandService {
    pub(super) write_repo: Arc<dyn ClinicServiceWriteRepository>,
    pub(super) read_repo: Arc<dyn ClinicServiceReadRepository>,
    pub(super) slug_service: Arc<SlugService<dyn ClinicServiceReadRepository>>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ClinicServiceCommandService {
    pub fn new(
        write_repo: Arc<dyn ClinicServiceWriteRepository>,
        read_repo: Arc<dyn ClinicServiceReadRepository>,
        slug_service: Arc<SlugService<dyn ClinicServiceReadRepository>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }
}

pub(super) fn parse_service_id(raw: &str) -> Result<ServiceId, ApplicationError> {
    ServiceId::parse(raw).map_err(|_| ApplicationError::not_found("service not found"))
}
