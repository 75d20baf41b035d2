use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::adapter::outgoing::sea_orm_entity::{course_materials, topics};
use crate::modules::catalog::application::domain::entities::Topic;
use crate::modules::catalog::application::ports::outgoing::topic_repository::{
    CreateTopicData, TopicRepository, TopicRepositoryError,
};

#[derive(Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn insert_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError> {
        let model = topics::ActiveModel {
            id: Set(Uuid::new_v4()),
            subject_id: Set(data.subject_id),
            name: Set(data.name.trim().to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_topic(result))
    }

    async fn find_topic(&self, topic_id: Uuid) -> Result<Topic, TopicRepositoryError> {
        let model = topics::Entity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(TopicRepositoryError::NotFound)?;

        Ok(model_to_topic(model))
    }

    async fn list_for_subject(
        &self,
        subject_id: Uuid,
    ) -> Result<Vec<Topic>, TopicRepositoryError> {
        let models = topics::Entity::find()
            .filter(topics::Column::SubjectId.eq(subject_id))
            .order_by_asc(topics::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_topic).collect())
    }

    async fn delete_topic_cascade(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        course_materials::Entity::delete_many()
            .filter(course_materials::Column::TopicId.eq(topic_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let res = topics::Entity::delete_many()
            .filter(topics::Column::Id.eq(topic_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(TopicRepositoryError::NotFound);
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(())
    }
}

fn model_to_topic(model: topics::Model) -> Topic {
    Topic {
        id: model.id,
        subject_id: model.subject_id,
        name: model.name,
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> TopicRepositoryError {
    TopicRepositoryError::DatabaseError(e.to_string())
}
