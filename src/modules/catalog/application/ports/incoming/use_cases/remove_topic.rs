use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveTopicUseCase: Send + Sync {
    /// Deletes the topic and its course materials; the owning subject and
    /// its other topics are untouched. Stored files are removed
    /// best-effort after the rows are gone.
    async fn execute(&self, topic_id: Uuid) -> Result<(), RemoveTopicError>;
}
