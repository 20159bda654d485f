// src/application/commands/services/update.rs
use super::{ClinicServiceCommandService, service::parse_service_id};
use crate::{
    application::{
        dto::{AuthenticatedUser, ClinicServiceDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        clinic_service::ClinicServiceUpdate,
        content::{Body, Title, optional_text},
    },
};

#[derive(Debug, Default)]
pub struct UpdateClinicServiceCommand {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub order: Option<i32>,
}

impl ClinicServiceCommandService {
    pub async fn update_service(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateClinicServiceCommand,
    ) -> ApplicationResult<ClinicServiceDto> {
        let id = parse_service_id(&command.id)?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("service not found"))?;

        let mut update = ClinicServiceUpdate::new(id, self.clock.now());

        if let Some(title) = command.title {
            let title = Title::new(title)?;
            if title != existing.title {
                let slug = self.slug_service.claim(&title, Some(id)).await?;
                update = update.with_title(title, Some(slug));
            }
        }
        if let Some(description) = command.description {
            update = update.with_description(Body::named(description, "description")?);
        }
        if let Some(content) = command.content {
            update = update.with_content(Body::new(content)?);
        }
        if let Some(icon) = command.icon {
            update = update.with_icon(optional_text(Some(icon)));
        }
        if let Some(image) = command.image {
            update = update.with_image(optional_text(Some(image)));
        }
        if let Some(order) = command.order {
            update = update.with_order(order);
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(
            service_id = %updated.id,
            slug = %updated.slug,
            editor = %actor.id,
            "service updated"
        );
        Ok(updated.into())
    }
}
