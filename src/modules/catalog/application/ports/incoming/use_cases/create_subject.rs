use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::Subject;
use crate::modules::catalog::application::ports::outgoing::subject_repository::CreateSubjectData;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSubjectError {
    /// The given teacher id doesn't resolve to an existing user.
    #[error("Assigned teacher does not exist")]
    UnknownTeacher,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateSubjectUseCase: Send + Sync {
    async fn execute(&self, data: CreateSubjectData) -> Result<Subject, CreateSubjectError>;
}
