use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub name: String,

    #[sea_orm(column_type = "Text", string_len = 50)]
    pub code: String,

    // Opaque reference into the grades subsystem.
    #[sea_orm(column_type = "Text", string_len = 50)]
    pub grade_id: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(nullable)]
    pub duration_weeks: Option<i32>,

    // No FK: users are owned by the auth system and may be deleted
    // externally without cascading into the catalog.
    #[sea_orm(column_type = "Uuid", nullable)]
    pub teacher_id: Option<Uuid>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::catalog::adapter::outgoing::sea_orm_entity::topics::Entity"
    )]
    Topics,

    #[sea_orm(
        has_many = "crate::modules::catalog::adapter::outgoing::sea_orm_entity::course_materials::Entity"
    )]
    CourseMaterials,
}

impl Related<crate::modules::catalog::adapter::outgoing::sea_orm_entity::topics::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Topics.def()
    }
}

impl Related<crate::modules::catalog::adapter::outgoing::sea_orm_entity::course_materials::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::CourseMaterials.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(name) = &self.name {
            self.name = Set(name.trim().to_string());
        }

        if let ActiveValue::Set(code) = &self.code {
            self.code = Set(code.trim().to_string());
        }

        #[cfg(feature = "no_db_triggers")]
        if !_insert {
            self.updated_at = Set(chrono::Utc::now().into());
        }

        Ok(self)
    }
}
