// src/application/commands/services/create.rs
use super::ClinicServiceCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ClinicServiceDto},
        error::ApplicationResult,
    },
    domain::{
        clinic_service::{NewClinicService, ServiceId},
        content::{Body, Title, optional_text},
    },
};

#[derive(Debug, Default)]
pub struct CreateClinicServiceCommand {
    pub title: String,
    pub description: String,
    pub content: String,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub order: Option<i32>,
}

impl ClinicServiceCommandService {
    pub async fn create_service(
        &self,
        actor: &AuthenticatedUser,
        command: CreateClinicServiceCommand,
    ) -> ApplicationResult<ClinicServiceDto> {
        let title = Title::new(command.title)?;
        let description = Body::named(command.description, "description")?;
        let content = Body::new(command.content)?;
        let slug = self
            .slug_service
            .claim(&title, None::<ServiceId>)
            .await?;

        let created = self
            .write_repo
            .insert(NewClinicService {
                title,
                slug,
                description,
                content,
                icon: optional_text(command.icon),
                image: optional_text(command.image),
                order: command.order.unwrap_or_default(),
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(
            service_id = %created.id,
            slug = %created.slug,
            editor = %actor.id,
            "service created"
        );
        Ok(created.into())
    }
}
