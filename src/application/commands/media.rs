// src/application/commands/media.rs
use std::{path::Path, sync::Arc};

use bytes::Bytes;

use crate::{
    application::{
        dto::{AuthenticatedUser, MediaDto},
        error::{ApplicationError, ApplicationResult},
        ports::{storage::MediaStorage, time::Clock},
    },
    domain::media::{MediaId, MediaRepository, NewMedia},
};

pub struct UploadMediaCommand {
    pub original_name: String,
    pub mime_type: String,
    pub contents: Bytes,
}

pub struct MediaCommandService {
    repo: Arc<dyn MediaRepository>,
    storage: Arc<dyn MediaStorage>,
    clock: Arc<dyn Clock>,
}

impl MediaCommandService {
    pub fn new(
        repo: Arc<dyn MediaRepository>,
        storage: Arc<dyn MediaStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            storage,
            clock,
        }
    }

    pub async fn upload(
        &self,
        actor: &AuthenticatedUser,
        command: UploadMediaCommand,
    ) -> ApplicationResult<MediaDto> {
        if command.contents.is_empty() {
            return Err(ApplicationError::validation("uploaded file is empty"));
        }
        let size = i64::try_from(command.contents.len())
            .map_err(|_| ApplicationError::validation("uploaded file is too large"))?;

        let now = self.clock.now();
        let filename = content_filename(
            &command.original_name,
            &command.contents,
            now.timestamp_nanos_opt().unwrap_or_default(),
        );
        let stored = self.storage.store(&filename, command.contents).await?;

        let inserted = self
            .repo
            .insert(NewMedia {
                filename,
                original_name: command.original_name,
                mime_type: command.mime_type,
                size,
                path: stored.path.clone(),
                url: stored.url,
                created_at: now,
            })
            .await;
        let media = match inserted {
            Ok(media) => media,
            Err(err) => {
                // No record will point at the file.
                if let Err(cleanup) = self.storage.remove(&stored.path).await {
                    tracing::warn!(path = %stored.path, error = %cleanup, "failed to remove orphaned upload");
                }
                return Err(err.into());
            }
        };

        tracing::info!(media_id = %media.id, url = %media.url, editor = %actor.id, "media uploaded");
        Ok(media.into())
    }

    /// Remove the record and its file. A file already gone is only logged.
    pub async fn delete(&self, actor: &AuthenticatedUser, id: &str) -> ApplicationResult<()> {
        let not_found = || ApplicationError::not_found("media not found");
        let id = MediaId::parse(id).map_err(|_| not_found())?;
        let media = self.repo.find_by_id(id).await?.ok_or_else(not_found)?;

        if !self.storage.remove(&media.path).await? {
            tracing::warn!(media_id = %id, path = %media.path, "media file already missing");
        }
        self.repo.delete(id).await?;
        tracing::info!(media_id = %id, editor = %actor.id, "media deleted");
        Ok(())
    }
}

/// `<blake3 of contents and upload time>.<original extension>`. The timestamp
/// keeps re-uploads of the same bytes from sharing one file.
fn content_filename(original_name: &str, contents: &[u8], uploaded_at_nanos: i64) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(contents);
    hasher.update(&uploaded_at_nanos.to_le_bytes());
    let hash = hasher.finalize().to_hex();
    match Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
    {
        Some(ext) => format!("{hash}.{}", ext.to_ascii_lowercase()),
        None => hash.to_string(),
    }
}
