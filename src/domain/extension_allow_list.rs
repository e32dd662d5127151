use std::collections::HashSet;

pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 5] = ["txt", "md", "csv", "json", "pdf"];

/// Set of file extensions accepted for upload, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionAllowList {
    extensions: HashSet<String>,
}

impl ExtensionAllowList {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    /// Returns the lowercased extension of `filename` when it is allowed.
    pub fn accept(&self, filename: &str) -> Option<String> {
        let extension = extension_of(filename)?;
        self.extensions.contains(&extension).then_some(extension)
    }

    pub fn is_allowed(&self, filename: &str) -> bool {
        self.accept(filename).is_some()
    }
}

impl Default for ExtensionAllowList {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_EXTENSIONS)
    }
}

pub fn extension_of(filename: &str) -> Option<String> {
    let (stem, extension) = filename.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension.to_ascii_lowercase())
}
