use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{subjects, topics};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course_materials")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    // Always set, also for topic-attached materials: subject-level
    // listings read this column directly.
    #[sea_orm(column_type = "Uuid")]
    pub subject_id: Uuid,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub topic_id: Option<Uuid>,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    // Public URL resolved by the asset store; never an internal path.
    #[sea_orm(column_type = "Text")]
    pub file_url: String,

    // No FK: the uploader may be deleted externally without cascading.
    #[sea_orm(column_type = "Uuid", nullable)]
    pub uploaded_by: Option<Uuid>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "subjects::Entity",
        from = "Column::SubjectId",
        to = "subjects::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Subjects,

    #[sea_orm(
        belongs_to = "topics::Entity",
        from = "Column::TopicId",
        to = "topics::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Topics,
}

impl Related<subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subjects.def()
    }
}

impl Related<topics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topics.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
