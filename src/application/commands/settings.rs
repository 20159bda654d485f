// src/application/commands/settings.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, SiteSettingsDto},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        content::optional_text,
        settings::{SettingsRepository, SiteSettingsUpdate},
    },
};

/// A supplied blank URL clears the stored one.
#[derive(Debug, Default)]
pub struct UpdateSettingsCommand {
    pub profile_photo_url: Option<String>,
    pub hero_photo_url: Option<String>,
}

pub struct SettingsCommandService {
    repo: Arc<dyn SettingsRepository>,
    clock: Arc<dyn Clock>,
}

impl SettingsCommandService {
    pub fn new(repo: Arc<dyn SettingsRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn update_settings(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateSettingsCommand,
    ) -> ApplicationResult<SiteSettingsDto> {
        let update = SiteSettingsUpdate {
            profile_photo_url: command.profile_photo_url.map(|v| optional_text(Some(v))),
            hero_photo_url: command.hero_photo_url.map(|v| optional_text(Some(v))),
        };
        let now = self.clock.now();
        if update.is_empty() {
            return Ok(self.repo.get_or_create(now).await?.into());
        }

        let settings = self.repo.update(update, now).await?;
        tracing::info!(editor = %actor.id, "site settings updated");
        Ok(settings.into())
    }
}
