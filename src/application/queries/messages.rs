use std::sync::Arc;

use crate::{
    application::{dto::ContactMessageDto, error::ApplicationResult},
    domain::message::ContactMessageRepository,
};

pub struct ContactQueryService {
    repo: Arc<dyn ContactMessageRepository>,
}

impl ContactQueryService {
    pub fn new(repo: Arc<dyn ContactMessageRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_messages(&self) -> ApplicationResult<Vec<ContactMessageDto>> {
        Ok(self.repo.list().await?.into_iter().map(Into::into).collect())
    }
}
