use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentKind, UploadedFile};

use super::text_decoder::TextDecoder;

#[derive(Default)]
pub struct PlainTextAdapter {
    decoder: TextDecoder,
}

impl PlainTextAdapter {
    pub fn new(decoder: TextDecoder) -> Self {
        Self { decoder }
    }
}

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        file: &UploadedFile,
    ) -> Result<String, FileLoaderError> {
        if file.kind != DocumentKind::Text {
            return Err(FileLoaderError::UnsupportedKind(file.kind.as_str().to_string()));
        }

        Ok(self.decoder.decode(data))
    }
}
