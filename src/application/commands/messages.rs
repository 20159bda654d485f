// src/application/commands/messages.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ContactMessageDto, error::ApplicationError, error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        content::{Body, optional_text},
        message::{ContactMessageRepository, NewContactMessage},
        user::Email,
    },
};

pub struct SendContactMessageCommand {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

pub struct ContactCommandService {
    repo: Arc<dyn ContactMessageRepository>,
    clock: Arc<dyn Clock>,
}

impl ContactCommandService {
    pub fn new(repo: Arc<dyn ContactMessageRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn send_message(
        &self,
        command: SendContactMessageCommand,
    ) -> ApplicationResult<ContactMessageDto> {
        let name = command.name.trim().to_string();
        if name.is_empty() {
            return Err(ApplicationError::validation("name cannot be empty"));
        }

        let stored = self
            .repo
            .insert(NewContactMessage {
                name,
                email: Email::new(command.email)?,
                phone: optional_text(command.phone),
                message: Body::named(command.message, "message")?,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(message_id = %stored.id, "contact message received");
        Ok(stored.into())
    }
}
