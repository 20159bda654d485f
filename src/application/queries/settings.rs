use std::sync::Arc;

use crate::{
    application::{dto::SiteSettingsDto, error::ApplicationResult, ports::time::Clock},
    domain::settings::SettingsRepository,
};

pub struct SettingsQueryService {
    repo: Arc<dyn SettingsRepository>,
    clock: Arc<dyn Clock>,
}

impl SettingsQueryService {
    pub fn new(repo: Arc<dyn SettingsRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// The settings row is created on first read.
    pub async fn get_settings(&self) -> ApplicationResult<SiteSettingsDto> {
        Ok(self.repo.get_or_create(self.clock.now()).await?.into())
    }
}
