use async_trait::async_trait;

use crate::modules::assets::application::domain::entities::{AssetId, FileUpload};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AssetStoreError {
    #[error("Storage I/O error: {0}")]
    Io(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Binary persistence for course-material files.
///
/// Implementations own the physical layout (local disk, object storage);
/// callers only ever see opaque asset ids and public URLs, so the backend
/// can be swapped without a schema change.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Persists the file under a collision-resistant generated name and
    /// returns its identifier. The original extension is preserved as a
    /// client-side hint.
    async fn store(&self, upload: &FileUpload) -> Result<AssetId, AssetStoreError>;

    /// Deterministic public URL for a stored asset. Pure string
    /// construction from the configured base path: no lookup, no I/O.
    fn public_url(&self, asset_id: &AssetId) -> String;

    /// Removes the underlying file. A file that is already absent is a
    /// success: removal is idempotent and safe to retry.
    async fn remove(&self, asset_id: &AssetId) -> Result<(), AssetStoreError>;
}
