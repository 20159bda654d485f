// tests/support/mocks/storage.rs
use async_trait::async_trait;
use bytes::Bytes;
use clinic_cms::application::{
    ApplicationResult,
    ports::storage::{MediaStorage, StoredFile},
};
use std::collections::HashMap;
use std::sync::Mutex;

/// ファイルをメモリ上に保持するストレージ
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    files: Mutex<HashMap<String, Bytes>>,
}

impl InMemoryStorage {
    pub fn contains(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    /// 外部要因でファイルが消えた状況を再現する
    pub fn evict(&self, path: &str) {
        self.files.lock().unwrap().remove(path);
    }
}

#[async_trait]
impl MediaStorage for InMemoryStorage {
    async fn store(&self, filename: &str, contents: Bytes) -> ApplicationResult<StoredFile> {
        let path = format!("mem/{filename}");
        self.files.lock().unwrap().insert(path.clone(), contents);
        Ok(StoredFile {
            path,
            url: format!("/uploads/{filename}"),
        })
    }

    async fn remove(&self, path: &str) -> ApplicationResult<bool> {
        Ok(self.files.lock().unwrap().remove(path).is_some())
    }
}
