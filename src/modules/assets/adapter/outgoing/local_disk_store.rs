use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

use crate::modules::assets::application::domain::entities::{AssetId, FileUpload};
use crate::modules::assets::application::domain::policies::upload_policy::UploadPolicy;
use crate::modules::assets::application::ports::outgoing::asset_store::{
    AssetStore, AssetStoreError,
};

/// Local filesystem adapter: files live flat under a configured root
/// directory and are served by a reverse proxy (or static-file middleware)
/// under the public base path.
#[derive(Debug, Clone)]
pub struct LocalDiskAssetStore {
    root: PathBuf,
    public_base_path: String,
}

impl LocalDiskAssetStore {
    pub fn new(root: impl Into<PathBuf>, public_base_path: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_path: public_base_path.into(),
        }
    }

    pub fn from_policy(policy: &UploadPolicy) -> Self {
        Self::new(policy.storage_root.clone(), policy.public_base_path.clone())
    }

    fn generated_name(upload: &FileUpload) -> String {
        match upload.sanitized_extension() {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        }
    }
}

#[async_trait]
impl AssetStore for LocalDiskAssetStore {
    async fn store(&self, upload: &FileUpload) -> Result<AssetId, AssetStoreError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| AssetStoreError::Io(e.to_string()))?;

        let name = Self::generated_name(upload);
        let path = self.root.join(&name);

        tokio::fs::write(&path, &upload.bytes)
            .await
            .map_err(|e| AssetStoreError::Io(e.to_string()))?;

        Ok(AssetId::new(name))
    }

    fn public_url(&self, asset_id: &AssetId) -> String {
        format!(
            "{}/{}",
            self.public_base_path.trim_end_matches('/'),
            asset_id
        )
    }

    async fn remove(&self, asset_id: &AssetId) -> Result<(), AssetStoreError> {
        let path = self.root.join(asset_id.as_str());

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            // Idempotent: a missing file means the work is already done.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AssetStoreError::Io(e.to_string())),
        }
    }
}
