use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::Topic;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    AddTopicError, AddTopicUseCase,
};
use crate::modules::catalog::application::ports::outgoing::{
    CreateTopicData, SubjectRepository, SubjectRepositoryError, TopicRepository,
};

pub struct AddTopicService<T, S>
where
    T: TopicRepository,
    S: SubjectRepository,
{
    topics: T,
    subjects: S,
}

impl<T, S> AddTopicService<T, S>
where
    T: TopicRepository,
    S: SubjectRepository,
{
    pub fn new(topics: T, subjects: S) -> Self {
        Self { topics, subjects }
    }
}

#[async_trait]
impl<T, S> AddTopicUseCase for AddTopicService<T, S>
where
    T: TopicRepository + Send + Sync,
    S: SubjectRepository + Send + Sync,
{
    async fn execute(&self, subject_id: Uuid, name: String) -> Result<Topic, AddTopicError> {
        if name.trim().is_empty() {
            return Err(AddTopicError::InvalidInput(
                "topic name must not be empty".to_string(),
            ));
        }

        // A topic cannot exist without its subject.
        self.subjects
            .find_subject(subject_id)
            .await
            .map_err(|e| match e {
                SubjectRepositoryError::NotFound => AddTopicError::SubjectNotFound,
                SubjectRepositoryError::DatabaseError(msg) => AddTopicError::RepositoryError(msg),
            })?;

        self.topics
            .insert_topic(CreateTopicData { subject_id, name })
            .await
            .map_err(|e| AddTopicError::RepositoryError(e.to_string()))
    }
}
