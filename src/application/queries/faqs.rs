use std::sync::Arc;

use crate::{
    application::{dto::FaqDto, error::ApplicationResult},
    domain::faq::{FaqId, FaqRepository},
};

pub struct FaqQueryService {
    repo: Arc<dyn FaqRepository>,
}

impl FaqQueryService {
    pub fn new(repo: Arc<dyn FaqRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_faqs(&self) -> ApplicationResult<Vec<FaqDto>> {
        Ok(self.repo.list().await?.into_iter().map(Into::into).collect())
    }

    pub async fn get_faq(&self, id: &str) -> ApplicationResult<Option<FaqDto>> {
        let Ok(id) = FaqId::parse(id) else {
            return Ok(None);
        };
        Ok(self.repo.find_by_id(id).await?.map(Into::into))
    }
}
