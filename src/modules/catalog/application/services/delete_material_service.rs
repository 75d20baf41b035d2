use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::modules::assets::application::domain::entities::AssetId;
use crate::modules::assets::application::ports::outgoing::asset_store::AssetStore;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    DeleteMaterialError, DeleteMaterialUseCase,
};
use crate::modules::catalog::application::ports::outgoing::{
    MaterialRepository, MaterialRepositoryError,
};

pub struct DeleteMaterialService<M, A>
where
    M: MaterialRepository,
    A: AssetStore,
{
    materials: M,
    assets: A,
}

impl<M, A> DeleteMaterialService<M, A>
where
    M: MaterialRepository,
    A: AssetStore,
{
    pub fn new(materials: M, assets: A) -> Self {
        Self { materials, assets }
    }
}

#[async_trait]
impl<M, A> DeleteMaterialUseCase for DeleteMaterialService<M, A>
where
    M: MaterialRepository + Send + Sync,
    A: AssetStore + Send + Sync,
{
    async fn execute(&self, material_id: Uuid) -> Result<(), DeleteMaterialError> {
        let material = self
            .materials
            .find_material(material_id)
            .await
            .map_err(|e| match e {
                MaterialRepositoryError::NotFound => DeleteMaterialError::MaterialNotFound,
                MaterialRepositoryError::DatabaseError(msg) => {
                    DeleteMaterialError::RepositoryError(msg)
                }
            })?;

        self.materials
            .delete_material(material_id)
            .await
            .map_err(|e| match e {
                MaterialRepositoryError::NotFound => DeleteMaterialError::MaterialNotFound,
                MaterialRepositoryError::DatabaseError(msg) => {
                    DeleteMaterialError::RepositoryError(msg)
                }
            })?;

        // Row is gone; file removal is best-effort and logged only.
        match AssetId::from_public_url(&material.file_url) {
            Some(asset_id) => {
                if let Err(e) = self.assets.remove(&asset_id).await {
                    warn!(
                        material_id = %material_id,
                        asset_id = %asset_id,
                        error = %e,
                        "failed to remove stored asset after material delete"
                    );
                }
            }
            None => warn!(
                material_id = %material_id,
                file_url = %material.file_url,
                "could not derive asset id from file url, skipping cleanup"
            ),
        }

        Ok(())
    }
}
