use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::application::services::{UploadStore, UploadStoreError};
use crate::domain::FileId;

/// Turns stored uploads into text. Decoded text is never cached; every call
/// re-reads the backing file.
pub struct DocumentProcessor {
    upload_store: Arc<UploadStore>,
    file_loader: Arc<dyn FileLoader>,
}

impl DocumentProcessor {
    pub fn new(upload_store: Arc<UploadStore>, file_loader: Arc<dyn FileLoader>) -> Self {
        Self {
            upload_store,
            file_loader,
        }
    }

    /// Extracts the file once and records the outcome in its processed flag.
    /// Failures are logged and absorbed.
    #[tracing::instrument(skip(self, id), fields(file_id = %id))]
    pub async fn process(&self, id: &FileId) {
        let processed = match self.load_text(id).await {
            Ok(text) => !text.is_empty(),
            Err(e) => {
                tracing::warn!(error = %e, "Document processing failed");
                false
            }
        };

        if !self.upload_store.mark_processed(id, processed) {
            tracing::debug!("File removed before processing finished");
            return;
        }

        tracing::info!(processed, "Document processed");
    }

    pub async fn load_text(&self, id: &FileId) -> Result<String, DocumentError> {
        let file = self
            .upload_store
            .get(id)
            .ok_or(DocumentError::UnknownFile(*id))?;
        let data = self.upload_store.read(&file).await?;
        let text = self.file_loader.extract_text(&data, &file).await?;
        Ok(text)
    }

    /// Resolves requested ids to document texts in request order, skipping
    /// ids that are malformed, unknown, unprocessed or unreadable.
    pub async fn collect_texts(&self, ids: &[String]) -> Vec<String> {
        let mut texts = Vec::with_capacity(ids.len());

        for raw_id in ids {
            let Ok(id) = raw_id.parse::<FileId>() else {
                tracing::debug!(file_id = %raw_id, "Skipping malformed document id");
                continue;
            };

            match self.upload_store.get(&id) {
                Some(file) if file.processed => {}
                Some(_) => {
                    tracing::debug!(file_id = %id, "Skipping unprocessed document");
                    continue;
                }
                None => {
                    tracing::debug!(file_id = %id, "Skipping unknown document");
                    continue;
                }
            }

            match self.load_text(&id).await {
                Ok(text) => texts.push(text),
                Err(e) => tracing::warn!(file_id = %id, error = %e, "Skipping unreadable document"),
            }
        }

        texts
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("unknown file: {0}")]
    UnknownFile(FileId),
    #[error("read: {0}")]
    Read(#[from] UploadStoreError),
    #[error("extraction: {0}")]
    Extraction(#[from] FileLoaderError),
}
