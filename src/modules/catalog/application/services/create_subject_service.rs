use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::Subject;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateSubjectError, CreateSubjectUseCase,
};
use crate::modules::catalog::application::ports::outgoing::subject_repository::{
    CreateSubjectData, SubjectRepository, SubjectRepositoryError,
};
use crate::modules::users::application::ports::outgoing::user_directory::UserDirectory;

pub struct CreateSubjectService<R, U>
where
    R: SubjectRepository,
    U: UserDirectory,
{
    subjects: R,
    users: U,
}

impl<R, U> CreateSubjectService<R, U>
where
    R: SubjectRepository,
    U: UserDirectory,
{
    pub fn new(subjects: R, users: U) -> Self {
        Self { subjects, users }
    }
}

#[async_trait]
impl<R, U> CreateSubjectUseCase for CreateSubjectService<R, U>
where
    R: SubjectRepository + Send + Sync,
    U: UserDirectory + Send + Sync,
{
    async fn execute(&self, data: CreateSubjectData) -> Result<Subject, CreateSubjectError> {
        if data.name.trim().is_empty() {
            return Err(CreateSubjectError::InvalidInput(
                "subject name must not be empty".to_string(),
            ));
        }
        if data.code.trim().is_empty() {
            return Err(CreateSubjectError::InvalidInput(
                "subject code must not be empty".to_string(),
            ));
        }
        if data.grade_id.trim().is_empty() {
            return Err(CreateSubjectError::InvalidInput(
                "grade id must not be empty".to_string(),
            ));
        }

        // Teacher reference is validated once, here at write time.
        if let Some(teacher_id) = data.teacher_id {
            let exists = self
                .users
                .user_exists(teacher_id)
                .await
                .map_err(|e| CreateSubjectError::RepositoryError(e.to_string()))?;

            if !exists {
                return Err(CreateSubjectError::UnknownTeacher);
            }
        }

        self.subjects
            .insert_subject(data)
            .await
            .map_err(|e| match e {
                SubjectRepositoryError::NotFound => CreateSubjectError::RepositoryError(
                    "unexpected not found while creating subject".to_string(),
                ),
                SubjectRepositoryError::DatabaseError(msg) => {
                    CreateSubjectError::RepositoryError(msg)
                }
            })
    }
}
