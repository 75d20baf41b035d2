use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::adapter::outgoing::sea_orm_entity::{
    course_materials, subjects, topics,
};
use crate::modules::catalog::application::domain::entities::Subject;
use crate::modules::catalog::application::ports::outgoing::subject_repository::{
    CreateSubjectData, PatchField, PatchSubjectData, SubjectFilter, SubjectRepository,
    SubjectRepositoryError,
};
use crate::modules::users::application::domain::entities::UserId;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct SubjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SubjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubjectRepository for SubjectRepositoryPostgres {
    async fn insert_subject(
        &self,
        data: CreateSubjectData,
    ) -> Result<Subject, SubjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = subjects::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name.trim().to_string()),
            code: Set(data.code.trim().to_string()),
            grade_id: Set(data.grade_id),
            description: Set(data.description),
            duration_weeks: Set(data.duration_weeks.map(|w| w as i32)),
            teacher_id: Set(data.teacher_id.map(Uuid::from)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_subject(result))
    }

    async fn find_subject(&self, subject_id: Uuid) -> Result<Subject, SubjectRepositoryError> {
        let model = subjects::Entity::find_by_id(subject_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(SubjectRepositoryError::NotFound)?;

        Ok(model_to_subject(model))
    }

    async fn list_subjects(
        &self,
        filter: &SubjectFilter,
    ) -> Result<Vec<Subject>, SubjectRepositoryError> {
        let mut query = subjects::Entity::find();

        if let Some(grade_id) = &filter.grade_id {
            query = query.filter(subjects::Column::GradeId.eq(grade_id.clone()));
        }

        if let Some(search) = &filter.search {
            let term = search.trim();
            if !term.is_empty() {
                query = query.filter(
                    Expr::col(subjects::Column::Name).ilike(format!("%{}%", escape_like(term))),
                );
            }
        }

        let models = query
            .order_by_asc(subjects::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_subject).collect())
    }

    async fn patch_subject(
        &self,
        subject_id: Uuid,
        data: PatchSubjectData,
    ) -> Result<Subject, SubjectRepositoryError> {
        let mut model = <subjects::ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.name {
            model.name = Set(name.trim().to_string());
        }

        if let PatchField::Value(grade_id) = data.grade_id {
            model.grade_id = Set(grade_id);
        }

        match data.description {
            PatchField::Unset => {}
            PatchField::Null => model.description = Set(None),
            PatchField::Value(desc) => model.description = Set(Some(desc)),
        }

        match data.duration_weeks {
            PatchField::Unset => {}
            PatchField::Null => model.duration_weeks = Set(None),
            PatchField::Value(weeks) => model.duration_weeks = Set(Some(weeks as i32)),
        }

        match data.teacher_id {
            PatchField::Unset => {}
            PatchField::Null => model.teacher_id = Set(None),
            PatchField::Value(teacher) => model.teacher_id = Set(Some(teacher.into())),
        }

        let has_changes = model.name.is_set()
            || model.grade_id.is_set()
            || model.description.is_set()
            || model.duration_weeks.is_set()
            || model.teacher_id.is_set();

        if !has_changes {
            return self.find_subject(subject_id).await;
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = subjects::Entity::update_many()
            .set(model)
            .filter(subjects::Column::Id.eq(subject_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(SubjectRepositoryError::NotFound)?;

        Ok(model_to_subject(result))
    }

    async fn delete_subject_cascade(
        &self,
        subject_id: Uuid,
    ) -> Result<(), SubjectRepositoryError> {
        // Materials first, then topics, then the subject row. The FKs are
        // RESTRICT, so a different order would be rejected by the database.
        let txn = self.db.begin().await.map_err(map_db_err)?;

        course_materials::Entity::delete_many()
            .filter(course_materials::Column::SubjectId.eq(subject_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        topics::Entity::delete_many()
            .filter(topics::Column::SubjectId.eq(subject_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let res = subjects::Entity::delete_many()
            .filter(subjects::Column::Id.eq(subject_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(SubjectRepositoryError::NotFound);
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_subject(model: subjects::Model) -> Subject {
    Subject {
        id: model.id,
        name: model.name,
        code: model.code,
        grade_id: model.grade_id,
        description: model.description,
        duration_weeks: model.duration_weeks.map(|w| w as u32),
        teacher_id: model.teacher_id.map(UserId::from),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn map_db_err(e: DbErr) -> SubjectRepositoryError {
    SubjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
