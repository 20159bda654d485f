use std::sync::Arc;

use crate::{
    application::{dto::MediaDto, error::ApplicationResult},
    domain::media::MediaRepository,
};

pub struct MediaQueryService {
    repo: Arc<dyn MediaRepository>,
}

impl MediaQueryService {
    pub fn new(repo: Arc<dyn MediaRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_media(&self) -> ApplicationResult<Vec<MediaDto>> {
        Ok(self.repo.list().await?.into_iter().map(Into::into).collect())
    }
}
