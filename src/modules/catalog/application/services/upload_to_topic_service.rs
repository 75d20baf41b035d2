use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::modules::assets::application::domain::entities::FileUpload;
use crate::modules::assets::application::domain::policies::upload_policy::UploadPolicy;
use crate::modules::assets::application::ports::outgoing::asset_store::AssetStore;
use crate::modules::catalog::application::domain::entities::CourseMaterial;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    MaterialMeta, UploadMaterialError, UploadMaterialToTopicUseCase,
};
use crate::modules::catalog::application::ports::outgoing::{
    CreateMaterialData, MaterialRepository, TopicRepository, TopicRepositoryError,
};

pub struct UploadToTopicService<T, M, A>
where
    T: TopicRepository,
    M: MaterialRepository,
    A: AssetStore,
{
    topics: T,
    materials: M,
    assets: A,
    policy: UploadPolicy,
}

impl<T, M, A> UploadToTopicService<T, M, A>
where
    T: TopicRepository,
    M: MaterialRepository,
    A: AssetStore,
{
    pub fn new(topics: T, materials: M, assets: A, policy: UploadPolicy) -> Self {
        Self {
            topics,
            materials,
            assets,
            policy,
        }
    }
}

#[async_trait]
impl<T, M, A> UploadMaterialToTopicUseCase for UploadToTopicService<T, M, A>
where
    T: TopicRepository + Send + Sync,
    M: MaterialRepository + Send + Sync,
    A: AssetStore + Send + Sync,
{
    async fn execute(
        &self,
        topic_id: Uuid,
        file: FileUpload,
        meta: MaterialMeta,
    ) -> Result<CourseMaterial, UploadMaterialError> {
        if meta.title.trim().is_empty() {
            return Err(UploadMaterialError::InvalidInput(
                "material title must not be empty".to_string(),
            ));
        }
        self.policy.validate(&file)?;

        // The topic carries its owning subject: the material rows get both,
        // so subject-level listings never need a join through topics.
        let topic = self.topics.find_topic(topic_id).await.map_err(|e| match e {
            TopicRepositoryError::NotFound => UploadMaterialError::TopicNotFound,
            TopicRepositoryError::DatabaseError(msg) => UploadMaterialError::RepositoryError(msg),
        })?;

        let asset_id = self
            .assets
            .store(&file)
            .await
            .map_err(|e| UploadMaterialError::StorageError(e.to_string()))?;
        let file_url = self.assets.public_url(&asset_id);

        let inserted = self
            .materials
            .insert_material(CreateMaterialData {
                subject_id: topic.subject_id,
                topic_id: Some(topic.id),
                title: meta.title,
                description: meta.description,
                file_url,
                uploaded_by: meta.uploaded_by,
            })
            .await;

        match inserted {
            Ok(material) => Ok(material),
            Err(e) => {
                if let Err(cleanup) = self.assets.remove(&asset_id).await {
                    warn!(
                        asset_id = %asset_id,
                        error = %cleanup,
                        "failed to remove stored asset after insert failure"
                    );
                }
                Err(UploadMaterialError::RepositoryError(e.to_string()))
            }
        }
    }
}
