// src/infrastructure/storage.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::{MediaStorage, StoredFile},
};
use async_trait::async_trait;
use bytes::Bytes;
use std::{io::ErrorKind, path::PathBuf};

/// Public URL prefix under which `UPLOAD_DIR` is served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Media files on the local filesystem below a single upload directory.
#[derive(Debug, Clone)]
pub struct LocalDiskStorage {
    root: PathBuf,
}

impl LocalDiskStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

fn io_error(err: &std::io::Error) -> ApplicationError {
    ApplicationError::infrastructure(format!("media storage failure: {err}"))
}

#[async_trait]
impl MediaStorage for LocalDiskStorage {
    async fn store(&self, filename: &str, contents: Bytes) -> ApplicationResult<StoredFile> {
        if filename.contains(['/', '\\']) || filename.starts_with('.') {
            return Err(ApplicationError::validation("invalid media filename"));
        }
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|err| io_error(&err))?;

        let path = self.root.join(filename);
        tokio::fs::write(&path, &contents)
            .await
            .map_err(|err| io_error(&err))?;

        Ok(StoredFile {
            path: path.to_string_lossy().into_owned(),
            url: format!("{UPLOADS_URL_PREFIX}/{filename}"),
        })
    }

    async fn remove(&self, path: &str) -> ApplicationResult<bool> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(io_error(&err)),
        }
    }
}
