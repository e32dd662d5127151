use std::fmt;

use super::FileId;

/// Key of an upload's backing file inside the staging store.
///
/// Derived from the generated id only, so a caller-supplied filename can never
/// influence where bytes land on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn new(file_id: &FileId, extension: &str) -> Self {
        Self(format!("{}.{}", file_id.as_uuid(), extension))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
