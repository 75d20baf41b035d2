use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::Subject;
use crate::modules::catalog::application::ports::outgoing::subject_repository::PatchSubjectData;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSubjectError {
    #[error("Subject not found")]
    SubjectNotFound,

    #[error("Assigned teacher does not exist")]
    UnknownTeacher,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateSubjectUseCase: Send + Sync {
    /// Applies only the fields present in the patch. Teacher assignment is
    /// tri-state: absent keeps, null unassigns, a value reassigns after an
    /// existence check.
    async fn execute(
        &self,
        subject_id: Uuid,
        data: PatchSubjectData,
    ) -> Result<Subject, UpdateSubjectError>;
}
