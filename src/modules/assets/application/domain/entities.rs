use serde::{Deserialize, Serialize};
use std::fmt;

/// In-memory representation of an inbound file, as handed over by the API
/// boundary after multipart parsing.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Extension of the original file name, sanitized for reuse in a
    /// generated asset name: lowercase, alphanumeric only, at most 10
    /// characters. Returns `None` when the name has no usable extension.
    pub fn sanitized_extension(&self) -> Option<String> {
        let ext = self.file_name.rsplit_once('.')?.1;

        let cleaned: String = ext
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        if cleaned.is_empty() || cleaned.len() > 10 {
            return None;
        }

        Some(cleaned)
    }
}

/// Identifier of a stored asset: the generated file name, extension
/// included. Database rows never store this directly, only the public URL
/// derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recovers the asset id from a stored public URL: the final non-empty
    /// path segment. Returns `None` for URLs with no path segment, which
    /// callers treat as "nothing to clean up".
    pub fn from_public_url(url: &str) -> Option<Self> {
        let segment = url.trim_end_matches('/').rsplit('/').next()?;

        if segment.is_empty() {
            return None;
        }

        Some(Self(segment.to_string()))
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
