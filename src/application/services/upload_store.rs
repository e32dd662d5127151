use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use parking_lot::RwLock;

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::{FileId, UploadedFile, extension_of};

const FALLBACK_EXTENSION: &str = "bin";

/// Registry of uploaded files for the lifetime of the process.
///
/// Metadata lives in memory behind a lock; bytes live in the staging store,
/// one object per id. The lock is never held across an await.
pub struct UploadStore {
    staging_store: Arc<dyn StagingStore>,
    files: RwLock<HashMap<FileId, UploadedFile>>,
}

impl UploadStore {
    pub fn new(staging_store: Arc<dyn StagingStore>) -> Self {
        Self {
            staging_store,
            files: RwLock::new(HashMap::new()),
        }
    }

    /// Writes `data` under a freshly generated id and registers it unprocessed.
    ///
    /// Nothing is registered when the write fails.
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn put(&self, name: &str, data: Bytes) -> Result<FileId, UploadStoreError> {
        let extension = extension_of(name).unwrap_or_else(|| FALLBACK_EXTENSION.to_string());
        let file = UploadedFile::new(name.to_string(), &extension);
        let id = file.id;

        let written = self.staging_store.store(&file.storage_path, data).await?;

        tracing::debug!(
            file_id = %id,
            storage_path = %file.storage_path,
            bytes = written,
            "Upload written to staging store"
        );

        self.files.write().insert(id, file);
        Ok(id)
    }

    pub fn get(&self, id: &FileId) -> Option<UploadedFile> {
        self.files.read().get(id).cloned()
    }

    pub fn list(&self) -> Vec<UploadedFile> {
        let mut files: Vec<UploadedFile> = self.files.read().values().cloned().collect();
        files.sort_by_key(|f| f.upload_time);
        files
    }

    /// Returns false when the id is no longer registered.
    pub fn mark_processed(&self, id: &FileId, processed: bool) -> bool {
        match self.files.write().get_mut(id) {
            Some(file) => {
                file.processed = processed;
                true
            }
            None => false,
        }
    }

    pub async fn read(&self, file: &UploadedFile) -> Result<Vec<u8>, UploadStoreError> {
        Ok(self.staging_store.fetch(&file.storage_path).await?)
    }

    /// Deletes the backing object and the entry. A backing object that is
    /// already gone is not an error; an unknown id yields `Ok(false)`.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, id: &FileId) -> Result<bool, UploadStoreError> {
        let Some(file) = self.get(id) else {
            return Ok(false);
        };

        match self.staging_store.delete(&file.storage_path).await {
            Ok(()) => {}
            Err(StagingStoreError::NotFound(path)) => {
                tracing::debug!(storage_path = %path, "Backing file already missing");
            }
            Err(e) => return Err(e.into()),
        }

        Ok(self.files.write().remove(id).is_some())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadStoreError {
    #[error("storage: {0}")]
    Storage(#[from] StagingStoreError),
}
