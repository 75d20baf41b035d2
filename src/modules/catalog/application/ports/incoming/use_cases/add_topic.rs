use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::Topic;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddTopicError {
    #[error("Subject not found")]
    SubjectNotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddTopicUseCase: Send + Sync {
    async fn execute(&self, subject_id: Uuid, name: String) -> Result<Topic, AddTopicError>;
}
