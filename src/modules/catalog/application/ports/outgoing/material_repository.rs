use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::CourseMaterial;
use crate::modules::users::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct CreateMaterialData {
    pub subject_id: Uuid,
    /// Must belong to `subject_id` when present. Upload flows derive the
    /// subject from the topic, so the pair is consistent by construction.
    pub topic_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub uploaded_by: Option<UserId>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MaterialRepositoryError {
    #[error("Course material not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MaterialRepository: Send + Sync {
    async fn insert_material(
        &self,
        data: CreateMaterialData,
    ) -> Result<CourseMaterial, MaterialRepositoryError>;

    async fn find_material(
        &self,
        material_id: Uuid,
    ) -> Result<CourseMaterial, MaterialRepositoryError>;

    /// All materials of a subject (direct and topic-attached), newest first.
    async fn list_for_subject(
        &self,
        subject_id: Uuid,
    ) -> Result<Vec<CourseMaterial>, MaterialRepositoryError>;

    /// Materials attached to one topic, newest first.
    async fn list_for_topic(
        &self,
        topic_id: Uuid,
    ) -> Result<Vec<CourseMaterial>, MaterialRepositoryError>;

    /// Material count per subject for the given subject ids. Subjects with
    /// no materials are absent from the map.
    async fn count_by_subject(
        &self,
        subject_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, u64>, MaterialRepositoryError>;

    async fn delete_material(&self, material_id: Uuid) -> Result<(), MaterialRepositoryError>;
}
