use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::modules::assets::application::domain::entities::FileUpload;
use crate::modules::assets::application::domain::policies::upload_policy::UploadPolicy;
use crate::modules::assets::application::ports::outgoing::asset_store::AssetStore;
use crate::modules::catalog::application::domain::entities::CourseMaterial;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    MaterialMeta, UploadMaterialError, UploadMaterialToSubjectUseCase,
};
use crate::modules::catalog::application::ports::outgoing::{
    CreateMaterialData, MaterialRepository, SubjectRepository, SubjectRepositoryError,
};

pub struct UploadToSubjectService<S, M, A>
where
    S: SubjectRepository,
    M: MaterialRepository,
    A: AssetStore,
{
    subjects: S,
    materials: M,
    assets: A,
    policy: UploadPolicy,
}

impl<S, M, A> UploadToSubjectService<S, M, A>
where
    S: SubjectRepository,
    M: MaterialRepository,
    A: AssetStore,
{
    pub fn new(subjects: S, materials: M, assets: A, policy: UploadPolicy) -> Self {
        Self {
            subjects,
            materials,
            assets,
            policy,
        }
    }
}

#[async_trait]
impl<S, M, A> UploadMaterialToSubjectUseCase for UploadToSubjectService<S, M, A>
where
    S: SubjectRepository + Send + Sync,
    M: MaterialRepository + Send + Sync,
    A: AssetStore + Send + Sync,
{
    async fn execute(
        &self,
        subject_id: Uuid,
        file: FileUpload,
        meta: MaterialMeta,
    ) -> Result<CourseMaterial, UploadMaterialError> {
        // Fail fast: nothing is stored until input and target check out.
        if meta.title.trim().is_empty() {
            return Err(UploadMaterialError::InvalidInput(
                "material title must not be empty".to_string(),
            ));
        }
        self.policy.validate(&file)?;

        self.subjects
            .find_subject(subject_id)
            .await
            .map_err(|e| match e {
                SubjectRepositoryError::NotFound => UploadMaterialError::SubjectNotFound,
                SubjectRepositoryError::DatabaseError(msg) => {
                    UploadMaterialError::RepositoryError(msg)
                }
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
                subject_id,
                topic_id: None,
                title: meta.title,
                description: meta.description,
                file_url,
                uploaded_by: meta.uploaded_by,
            })
            .await;

        match inserted {
            Ok(material) => Ok(material),
            Err(e) => {
                // The row never landed; don't leave the file orphaned.
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
