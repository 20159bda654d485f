// src/application/commands/faqs.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, FaqDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::faq::{FaqContent, FaqId, FaqRepository},
};

pub struct SaveFaqCommand {
    pub question: String,
    pub answer: String,
}

pub struct FaqCommandService {
    repo: Arc<dyn FaqRepository>,
    clock: Arc<dyn Clock>,
}

impl FaqCommandService {
    pub fn new(repo: Arc<dyn FaqRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn create_faq(
        &self,
        actor: &AuthenticatedUser,
        command: SaveFaqCommand,
    ) -> ApplicationResult<FaqDto> {
        let content = FaqContent::new(command.question, command.answer)?;
        let faq = self.repo.insert(content, self.clock.now()).await?;
        tracing::info!(faq_id = %faq.id, editor = %actor.id, "faq created");
        Ok(faq.into())
    }

    pub async fn update_faq(
        &self,
        actor: &AuthenticatedUser,
        id: &str,
        command: SaveFaqCommand,
    ) -> ApplicationResult<FaqDto> {
        let id = self.existing(id).await?;
        let content = FaqContent::new(command.question, command.answer)?;
        let faq = self.repo.update(id, content, self.clock.now()).await?;
        tracing::info!(faq_id = %faq.id, editor = %actor.id, "faq updated");
        Ok(faq.into())
    }

    pub async fn delete_faq(&self, actor: &AuthenticatedUser, id: &str) -> ApplicationResult<()> {
        let id = self.existing(id).await?;
        self.repo.delete(id).await?;
        tracing::info!(faq_id = %id, editor = %actor.id, "faq deleted");
        Ok(())
    }

    async fn existing(&self, raw: &str) -> ApplicationResult<FaqId> {
        let not_found = || ApplicationError::not_found("faq not found");
        let id = FaqId::parse(raw).map_err(|_| not_found())?;
        self.repo.find_by_id(id).await?.ok_or_else(not_found)?;
        Ok(id)
    }
}
