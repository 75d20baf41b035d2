use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::Subject;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    UpdateSubjectError, UpdateSubjectUseCase,
};
use crate::modules::catalog::application::ports::outgoing::subject_repository::{
    PatchField, PatchSubjectData, SubjectRepository, SubjectRepositoryError,
};
use crate::modules::users::application::ports::outgoing::user_directory::UserDirectory;

pub struct UpdateSubjectService<R, U>
where
    R: SubjectRepository,
    U: UserDirectory,
{
    subjects: R,
    users: U,
}

impl<R, U> UpdateSubjectService<R, U>
where
    R: SubjectRepository,
    U: UserDirectory,
{
    pub fn new(subjects: R, users: U) -> Self {
        Self { subjects, users }
    }
}

#[async_trait]
impl<R, U> UpdateSubjectUseCase for UpdateSubjectService<R, U>
where
    R: SubjectRepository + Send + Sync,
    U: UserDirectory + Send + Sync,
{
    async fn execute(
        &self,
        subject_id: Uuid,
        data: PatchSubjectData,
    ) -> Result<Subject, UpdateSubjectError> {
        // Non-nullable columns accept Unset/Value only.
        if data.name.is_null() {
            return Err(UpdateSubjectError::InvalidInput(
                "subject name cannot be cleared".to_string(),
            ));
        }
        if data.grade_id.is_null() {
            return Err(UpdateSubjectError::InvalidInput(
                "grade id cannot be cleared".to_string(),
            ));
        }
        if let PatchField::Value(name) = &data.name {
            if name.trim().is_empty() {
                return Err(UpdateSubjectError::InvalidInput(
                    "subject name must not be empty".to_string(),
                ));
            }
        }
        if let PatchField::Value(grade_id) = &data.grade_id {
            if grade_id.trim().is_empty() {
                return Err(UpdateSubjectError::InvalidInput(
                    "grade id must not be empty".to_string(),
                ));
            }
        }

        // Reassignment validates the teacher reference at write time;
        // Unset keeps the current assignment, Null clears it.
        if let PatchField::Value(teacher_id) = &data.teacher_id {
            let exists = self
                .users
                .user_exists(*teacher_id)
                .await
                .map_err(|e| UpdateSubjectError::RepositoryError(e.to_string()))?;

            if !exists {
                return Err(UpdateSubjectError::UnknownTeacher);
            }
        }

        self.subjects
            .patch_subject(subject_id, data)
            .await
            .map_err(|e| match e {
                SubjectRepositoryError::NotFound => UpdateSubjectError::SubjectNotFound,
                SubjectRepositoryError::DatabaseError(msg) => {
                    UpdateSubjectError::RepositoryError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::modules::catalog::application::ports::outgoing::subject_repository::{
        CreateSubjectData, SubjectFilter,
    };
    use crate::modules::users::application::domain::entities::UserId;
    use crate::modules::users::application::ports::outgoing::user_directory::MockUserDirectory;

    #[derive(Clone)]
    struct MockSubjectRepo {
        result: Result<Subject, SubjectRepositoryError>,
    }

    #[async_trait]
    impl SubjectRepository for MockSubjectRepo {
        async fn insert_subject(
            &self,
            _data: CreateSubjectData,
        ) -> Result<Subject, SubjectRepositoryError> {
            unimplemented!("not needed for update tests")
        }

        async fn find_subject(&self, _subject_id: Uuid) -> Result<Subject, SubjectRepositoryError> {
            unimplemented!("not needed for update tests")
        }

        async fn list_subjects(
            &self,
            _filter: &SubjectFilter,
        ) -> Result<Vec<Subject>, SubjectRepositoryError> {
            unimplemented!("not needed for update tests")
        }

        async fn patch_subject(
            &self,
            _subject_id: Uuid,
            _data: PatchSubjectData,
        ) -> Result<Subject, SubjectRepositoryError> {
            self.result.clone()
        }

        async fn delete_subject_cascade(
            &self,
            _subject_id: Uuid,
        ) -> Result<(), SubjectRepositoryError> {
            unimplemented!("not needed for update tests")
        }
    }

    fn sample_subject(teacher_id: Option<UserId>) -> Subject {
        Subject {
            id: Uuid::new_v4(),
            name: "Mathematics".to_string(),
            code: "SS0123".to_string(),
            grade_id: "S1".to_string(),
            description: None,
            duration_weeks: None,
            teacher_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn unset_teacher_field_skips_directory_lookup() {
        let repo = MockSubjectRepo {
            result: Ok(sample_subject(None)),
        };
        let mut users = MockUserDirectory::new();
        users.expect_user_exists().never();

        let service = UpdateSubjectService::new(repo, users);

        let patch = PatchSubjectData {
            name: PatchField::Value("Applied Mathematics".to_string()),
            ..Default::default()
        };

        assert!(service.execute(Uuid::new_v4(), patch).await.is_ok());
    }

    #[tokio::test]
    async fn null_teacher_field_unassigns_without_lookup() {
        let repo = MockSubjectRepo {
            result: Ok(sample_subject(None)),
        };
        let mut users = MockUserDirectory::new();
        users.expect_user_exists().never();

        let service = UpdateSubjectService::new(repo, users);

        let patch = PatchSubjectData {
            teacher_id: PatchField::Null,
            ..Default::default()
        };

        let updated = service.execute(Uuid::new_v4(), patch).await.unwrap();
        assert_eq!(updated.teacher_id, None);
    }

    #[tokio::test]
    async fn reassigning_unknown_teacher_fails_before_patch() {
        let repo = MockSubjectRepo {
            result: Err(SubjectRepositoryError::DatabaseError(
                "must not be called".to_string(),
            )),
        };
        let mut users = MockUserDirectory::new();
        users.expect_user_exists().returning(|_| Ok(false));

        let service = UpdateSubjectService::new(repo, users);

        let patch = PatchSubjectData {
            teacher_id: PatchField::Value(UserId::from(Uuid::new_v4())),
            ..Default::default()
        };

        let result = service.execute(Uuid::new_v4(), patch).await;

        assert!(matches!(result, Err(UpdateSubjectError::UnknownTeacher)));
    }

    #[tokio::test]
    async fn clearing_name_is_rejected() {
        let repo = MockSubjectRepo {
            result: Ok(sample_subject(None)),
        };
        let service = UpdateSubjectService::new(repo, MockUserDirectory::new());

        let patch = PatchSubjectData {
            name: PatchField::Null,
            ..Default::default()
        };

        let result = service.execute(Uuid::new_v4(), patch).await;

        assert!(matches!(result, Err(UpdateSubjectError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn unknown_subject_maps_to_not_found() {
        let repo = MockSubjectRepo {
            result: Err(SubjectRepositoryError::NotFound),
        };
        let service = UpdateSubjectService::new(repo, MockUserDirectory::new());

        let result = service
            .execute(Uuid::new_v4(), PatchSubjectData::default())
            .await;

        assert!(matches!(result, Err(UpdateSubjectError::SubjectNotFound)));
    }
}
