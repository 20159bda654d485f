// src/application/commands/services/delete.rs
use super::{ClinicServiceCommandService, service::parse_service_id};
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

pub struct DeleteClinicServiceCommand {
    pub id: String,
}

impl ClinicServiceCommandService {
    pub async fn delete_service(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteClinicServiceCommand,
    ) -> ApplicationResult<()> {
        let id = parse_service_id(&command.id)?;
        let service = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("service not found"))?;

        self.write_repo.delete(id).await?;
        tracing::info!(service_id = %id, slug = %service.slug, editor = %actor.id, "service deleted");
        Ok(())
    }
}
