use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentKind, UploadedFile};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data, file),
        fields(file_id = %file.id, filename = %file.original_name)
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        file: &UploadedFile,
    ) -> Result<String, FileLoaderError> {
        if file.kind != DocumentKind::Pdf {
            return Err(FileLoaderError::UnsupportedKind(file.kind.as_str().to_string()));
        }

        let data = data.to_vec();

        // pdf-extract may panic on malformed input; the join error absorbs it.
        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let text = text.trim().to_string();
        tracing::info!(chars = text.chars().count(), "PDF text extraction complete");

        Ok(text)
    }
}
