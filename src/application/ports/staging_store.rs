use std::io;

use bytes::Bytes;

use crate::domain::StoragePath;

#[async_trait::async_trait]
pub trait StagingStore: Send + Sync {
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<u64, StagingStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, StagingStoreError>;

    /// Fails with [`StagingStoreError::NotFound`] when nothing is stored at `path`.
    async fn delete(&self, path: &StoragePath) -> Result<(), StagingStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
