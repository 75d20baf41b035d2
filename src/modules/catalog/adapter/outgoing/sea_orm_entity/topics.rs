use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{course_materials, subjects};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub subject_id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub name: String,

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

    #[sea_orm(has_many = "course_materials::Entity")]
    CourseMaterials,
}

impl Related<subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subjects.def()
    }
}

impl Related<course_materials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseMaterials.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
