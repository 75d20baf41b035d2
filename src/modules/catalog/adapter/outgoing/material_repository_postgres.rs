use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::adapter::outgoing::sea_orm_entity::course_materials::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::catalog::application::domain::entities::CourseMaterial;
use crate::modules::catalog::application::ports::outgoing::material_repository::{
    CreateMaterialData, MaterialRepository, MaterialRepositoryError,
};
use crate::modules::users::application::domain::entities::UserId;

#[derive(Clone)]
pub struct MaterialRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MaterialRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MaterialRepository for MaterialRepositoryPostgres {
    async fn insert_material(
        &self,
        data: CreateMaterialData,
    ) -> Result<CourseMaterial, MaterialRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            subject_id: Set(data.subject_id),
            topic_id: Set(data.topic_id),
            title: Set(data.title.trim().to_string()),
            description: Set(data.description),
            file_url: Set(data.file_url),
            uploaded_by: Set(data.uploaded_by.map(Uuid::from)),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_material(result))
    }

    async fn find_material(
        &self,
        material_id: Uuid,
    ) -> Result<CourseMaterial, MaterialRepositoryError> {
        let model = Entity::find_by_id(material_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(MaterialRepositoryError::NotFound)?;

        Ok(model_to_material(model))
    }

    async fn list_for_subject(
        &self,
        subject_id: Uuid,
    ) -> Result<Vec<CourseMaterial>, MaterialRepositoryError> {
        let models = Entity::find()
            .filter(Column::SubjectId.eq(subject_id))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_material).collect())
    }

    async fn list_for_topic(
        &self,
        topic_id: Uuid,
    ) -> Result<Vec<CourseMaterial>, MaterialRepositoryError> {
        let models = Entity::find()
            .filter(Column::TopicId.eq(topic_id))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_material).collect())
    }

    async fn count_by_subject(
        &self,
        subject_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, u64>, MaterialRepositoryError> {
        if subject_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(Uuid, i64)> = Entity::find()
            .select_only()
            .column(Column::SubjectId)
            .column_as(Column::Id.count(), "cnt")
            .filter(Column::SubjectId.is_in(subject_ids.to_vec()))
            .group_by(Column::SubjectId)
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|(subject_id, count)| (subject_id, count as u64))
            .collect())
    }

    async fn delete_material(&self, material_id: Uuid) -> Result<(), MaterialRepositoryError> {
        let res = Entity::delete_many()
            .filter(Column::Id.eq(material_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(MaterialRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_material(model: course_materials::Model) -> CourseMaterial {
    CourseMaterial {
        id: model.id,
        subject_id: model.subject_id,
        topic_id: model.topic_id,
        title: model.title,
        description: model.description,
        file_url: model.file_url,
        uploaded_by: model.uploaded_by.map(UserId::from),
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> MaterialRepositoryError {
    MaterialRepositoryError::DatabaseError(e.to_string())
}
