// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Location on the storage backend, kept for later removal.
    pub path: String,
    /// Public URL the site uses to reference the file.
    pub url: String,
}

#[async_trait]
pub trait MediaStorage: Send + Sync {
    async fn store(&self, filename: &str, contents: Bytes) -> ApplicationResult<StoredFile>;
    /// Remove a stored file. Returns `false` when nothing was there.
    async fn remove(&self, path: &str) -> ApplicationResult<bool>;
}
