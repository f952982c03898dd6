use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::errors::{AppError, AppResult};

/// Byte-level access to uploaded material files.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn read(&self, storage_path: &str) -> AppResult<Vec<u8>>;
}

/// Files kept under the local upload directory.
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, storage_path: &str) -> AppResult<PathBuf> {
        let relative = Path::new(storage_path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if storage_path.trim().is_empty() || escapes {
            return Err(AppError::StorageError(format!(
                "Refusing to read '{}' outside the upload directory",
                storage_path
            )));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn read(&self, storage_path: &str) -> AppResult<Vec<u8>> {
        let path = self.resolve(storage_path)?;
        let bytes = tokio::fs::read(&path).await?;
        Ok(bytes)
    }
}

/// Materials uploaded to public object storage and referenced by URL.
pub struct HttpFileStore {
    client: reqwest::Client,
}

impl HttpFileStore {
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FileStore for HttpFileStore {
    async fn read(&self, storage_path: &str) -> AppResult<Vec<u8>> {
        let response = self
            .client
            .get(storage_path)
            .send()
            .await?
            .error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

pub fn is_remote_path(storage_path: &str) -> bool {
    let lower = storage_path.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Dispatches URLs to the HTTP store and everything else to local disk.
pub struct RoutingFileStore {
    local: Arc<dyn FileStore>,
    remote: Arc<dyn FileStore>,
}

impl RoutingFileStore {
    pub fn new(local: Arc<dyn FileStore>, remote: Arc<dyn FileStore>) -> Self {
        Self { local, remote }
    }
}

#[async_trait]
impl FileStore for RoutingFileStore {
    async fn read(&self, storage_path: &str) -> AppResult<Vec<u8>> {
        if is_remote_path(storage_path) {
            self.remote.read(storage_path.trim()).await
        } else {
            self.local.read(storage_path).await
        }
    }
}
