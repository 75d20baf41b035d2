use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::SubjectDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSubjectDetailError {
    #[error("Subject not found")]
    SubjectNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSubjectDetailUseCase: Send + Sync {
    /// Subject plus ordered topics and materials with uploader names.
    async fn execute(&self, subject_id: Uuid) -> Result<SubjectDetail, GetSubjectDetailError>;
}
