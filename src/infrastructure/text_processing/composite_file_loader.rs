use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentKind, UploadedFile};

use super::{PdfAdapter, PlainTextAdapter, TextDecoder};

/// Dispatches to one adapter per document kind.
pub struct CompositeFileLoader {
    adapters: HashMap<DocumentKind, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(DocumentKind, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// Text through `decoder`, PDF through the PDF adapter.
    pub fn with_decoder(decoder: TextDecoder) -> Self {
        Self::new(vec![
            (
                DocumentKind::Text,
                Arc::new(PlainTextAdapter::new(decoder)) as Arc<dyn FileLoader>,
            ),
            (DocumentKind::Pdf, Arc::new(PdfAdapter::new())),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        file: &UploadedFile,
    ) -> Result<String, FileLoaderError> {
        let adapter = self
            .adapters
            .get(&file.kind)
            .ok_or_else(|| FileLoaderError::UnsupportedKind(file.kind.as_str().to_string()))?;

        adapter.extract_text(data, file).await
    }
}
