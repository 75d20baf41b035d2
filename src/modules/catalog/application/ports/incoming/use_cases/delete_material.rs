use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteMaterialError {
    #[error("Course material not found")]
    MaterialNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteMaterialUseCase: Send + Sync {
    /// Deletes the database record, then removes the stored asset
    /// best-effort. The record deletion succeeds even when the file is
    /// already gone or the storage call fails.
    async fn execute(&self, material_id: Uuid) -> Result<(), DeleteMaterialError>;
}
