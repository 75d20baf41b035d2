use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::Topic;

#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub subject_id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Topic not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn insert_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError>;

    async fn find_topic(&self, topic_id: Uuid) -> Result<Topic, TopicRepositoryError>;

    /// Topics of one subject, ordered by name ascending.
    async fn list_for_subject(&self, subject_id: Uuid)
        -> Result<Vec<Topic>, TopicRepositoryError>;

    /// Deletes the topic and its course materials in one transaction,
    /// materials first. The owning subject is left untouched.
    async fn delete_topic_cascade(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError>;
}
