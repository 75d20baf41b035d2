use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteSubjectError {
    #[error("Subject not found")]
    SubjectNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteSubjectUseCase: Send + Sync {
    /// Cascades: topics and course materials go with the subject. Stored
    /// files are removed best-effort after the rows are gone.
    async fn execute(&self, subject_id: Uuid) -> Result<(), DeleteSubjectError>;
}
