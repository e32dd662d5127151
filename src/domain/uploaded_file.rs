use chrono::{DateTime, Utc};

use super::{DocumentKind, FileId, StoragePath};

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub id: FileId,
    pub original_name: String,
    pub storage_path: StoragePath,
    pub kind: DocumentKind,
    pub upload_time: DateTime<Utc>,
    pub processed: bool,
}

impl UploadedFile {
    pub fn new(original_name: String, extension: &str) -> Self {
        let id = FileId::new();
        Self {
            id,
            original_name,
            storage_path: StoragePath::new(&id, extension),
            kind: DocumentKind::from_extension(extension),
            upload_time: Utc::now(),
            processed: false,
        }
    }
}
