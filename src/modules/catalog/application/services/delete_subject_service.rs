use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::modules::assets::application::domain::entities::AssetId;
use crate::modules::assets::application::ports::outgoing::asset_store::AssetStore;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    DeleteSubjectError, DeleteSubjectUseCase,
};
use crate::modules::catalog::application::ports::outgoing::{
    MaterialRepository, SubjectRepository, SubjectRepositoryError,
};

pub struct DeleteSubjectService<R, M, A>
where
    R: SubjectRepository,
    M: MaterialRepository,
    A: AssetStore,
{
    subjects: R,
    materials: M,
    assets: A,
}

impl<R, M, A> DeleteSubjectService<R, M, A>
where
    R: SubjectRepository,
    M: MaterialRepository,
    A: AssetStore,
{
    pub fn new(subjects: R, materials: M, assets: A) -> Self {
        Self {
            subjects,
            materials,
            assets,
        }
    }
}

#[async_trait]
impl<R, M, A> DeleteSubjectUseCase for DeleteSubjectService<R, M, A>
where
    R: SubjectRepository + Send + Sync,
    M: MaterialRepository + Send + Sync,
    A: AssetStore + Send + Sync,
{
    async fn execute(&self, subject_id: Uuid) -> Result<(), DeleteSubjectError> {
        // Snapshot the file URLs before the rows disappear.
        let materials = self
            .materials
            .list_for_subject(subject_id)
            .await
            .map_err(|e| DeleteSubjectError::RepositoryError(e.to_string()))?;

        self.subjects
            .delete_subject_cascade(subject_id)
            .await
            .map_err(|e| match e {
                SubjectRepositoryError::NotFound => DeleteSubjectError::SubjectNotFound,
                SubjectRepositoryError::DatabaseError(msg) => {
                    DeleteSubjectError::RepositoryError(msg)
                }
            })?;

        // The database is authoritative; file cleanup is best-effort and
        // never fails the delete.
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
                    "failed to remove stored asset after subject delete"
                );
            }
        }

        Ok(())
    }
}
