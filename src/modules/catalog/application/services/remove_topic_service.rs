use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::modules::assets::application::domain::entities::AssetId;
use crate::modules::assets::application::ports::outgoing::asset_store::AssetStore;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    RemoveTopicError, RemoveTopicUseCase,
};
use crate::modules::catalog::application::ports::outgoing::{
    MaterialRepository, TopicRepository, TopicRepositoryError,
};

pub struct RemoveTopicService<T, M, A>
where
    T: TopicRepository,
    M: MaterialRepository,
    A: AssetStore,
{
    topics: T,
    materials: M,
    assets: A,
}

impl<T, M, A> RemoveTopicService<T, M, A>
where
    T: TopicRepository,
    M: MaterialRepository,
    A: AssetStore,
{
    pub fn new(topics: T, materials: M, assets: A) -> Self {
        Self {
            topics,
            materials,
            assets,
        }
    }
}

#[async_trait]
impl<T, M, A> RemoveTopicUseCase for RemoveTopicService<T, M, A>
where
    T: TopicRepository + Send + Sync,
    M: MaterialRepository + Send + Sync,
    A: AssetStore + Send + Sync,
{
    async fn execute(&self, topic_id: Uuid) -> Result<(), RemoveTopicError> {
        let materials = self
            .materials
            .list_for_topic(topic_id)
            .await
            .map_err(|e| RemoveTopicError::RepositoryError(e.to_string()))?;

        self.topics
            .delete_topic_cascade(topic_id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::NotFound => RemoveTopicError::TopicNotFound,
                TopicRepositoryError::DatabaseError(msg) => RemoveTopicError::RepositoryError(msg),
            })?;

        for material in materials {
            let Some(asset_id) = AssetId::from_public_url(&material.file_url) else {
                warn!(
                    material_id = %material.id,
                    file_url = %material.file_url,
                    "could not derive asset id from file url, skipping cleanup"
                );
                continue;
            };

            if let Err(e) = self.assets.remove(&asset_id).await {
                warn!(
                    material_id = %material.id,
                    asset_id = %asset_id,
                    error = %e,
                    "failed to remove stored asset after topic delete"
                );
            }
        }

        Ok(())
    }
}
