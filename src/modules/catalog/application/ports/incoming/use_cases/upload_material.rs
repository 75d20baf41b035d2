use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::assets::application::domain::entities::FileUpload;
use crate::modules::assets::application::domain::policies::upload_policy::UploadValidationError;
use crate::modules::catalog::application::domain::entities::CourseMaterial;
use crate::modules::users::application::domain::entities::UserId;

/// Caller-supplied metadata accompanying an upload.
#[derive(Debug, Clone)]
pub struct MaterialMeta {
    pub title: String,
    pub description: Option<String>,
    pub uploaded_by: Option<UserId>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadMaterialError {
    #[error("Subject not found")]
    SubjectNotFound,

    #[error("Topic not found")]
    TopicNotFound,

    /// Missing, oversized, or disallowed file. Raised before any storage
    /// or database write.
    #[error("Invalid upload: {0}")]
    InvalidUpload(#[from] UploadValidationError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UploadMaterialToSubjectUseCase: Send + Sync {
    /// Stores the file and creates a material attached directly to the
    /// subject (no topic).
    async fn execute(
        &self,
        subject_id: Uuid,
        file: FileUpload,
        meta: MaterialMeta,
    ) -> Result<CourseMaterial, UploadMaterialError>;
}

#[async_trait]
pub trait UploadMaterialToTopicUseCase: Send + Sync {
    /// Stores the file and creates a material attached to the topic and,
    /// denormalized, to the topic's owning subject.
    async fn execute(
        &self,
        topic_id: Uuid,
        file: FileUpload,
        meta: MaterialMeta,
    ) -> Result<CourseMaterial, UploadMaterialError>;
}
