use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{Column, Entity};
use crate::modules::users::application::domain::entities::UserId;
use crate::modules::users::application::ports::outgoing::user_directory::{
    UserDirectory, UserDirectoryError,
};

#[derive(Debug, Clone)]
pub struct UserDirectoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserDirectoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserDirectory for UserDirectoryPostgres {
    async fn user_exists(&self, user_id: UserId) -> Result<bool, UserDirectoryError> {
        let count = Entity::find_by_id(Uuid::from(user_id))
            .count(&*self.db)
            .await
            .map_err(|e| UserDirectoryError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn display_names(
        &self,
        user_ids: &[UserId],
    ) -> Result<HashMap<UserId, String>, UserDirectoryError> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let uuids: Vec<Uuid> = user_ids.iter().map(|id| Uuid::from(*id)).collect();

        let rows: Vec<(Uuid, String)> = Entity::find()
            .select_only()
            .column(Column::Id)
            .column(Column::FullName)
            .filter(Column::Id.is_in(uuids))
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(|e| UserDirectoryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| (UserId::from(id), name))
            .collect())
    }
}
