use async_trait::async_trait;
use std::collections::HashSet;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{
    progress_pct, MaterialWithUploader, SubjectDetail,
};
use crate::modules::catalog::application::ports::incoming::use_cases::{
    GetSubjectDetailError, GetSubjectDetailUseCase,
};
use crate::modules::catalog::application::ports::outgoing::{
    CompletionSource, MaterialRepository, SubjectRepository, SubjectRepositoryError,
    TopicRepository,
};
use crate::modules::users::application::domain::entities::UserId;
use crate::modules::users::application::ports::outgoing::user_directory::UserDirectory;

pub struct GetSubjectDetailService<R, T, M, U, C>
where
    R: SubjectRepository,
    T: TopicRepository,
    M: MaterialRepository,
    U: UserDirectory,
    C: CompletionSource,
{
    subjects: R,
    topics: T,
    materials: M,
    users: U,
    completion: C,
}

impl<R, T, M, U, C> GetSubjectDetailService<R, T, M, U, C>
where
    R: SubjectRepository,
    T: TopicRepository,
    M: MaterialRepository,
    U: UserDirectory,
    C: CompletionSource,
{
    pub fn new(subjects: R, topics: T, materials: M, users: U, completion: C) -> Self {
        Self {
            subjects,
            topics,
            materials,
            users,
            completion,
        }
    }
}

#[async_trait]
impl<R, T, M, U, C> GetSubjectDetailUseCase for GetSubjectDetailService<R, T, M, U, C>
where
    R: SubjectRepository + Send + Sync,
    T: TopicRepository + Send + Sync,
    M: MaterialRepository + Send + Sync,
    U: UserDirectory + Send + Sync,
    C: CompletionSource + Send + Sync,
{
    async fn execute(&self, subject_id: Uuid) -> Result<SubjectDetail, GetSubjectDetailError> {
        let subject = self
            .subjects
            .find_subject(subject_id)
            .await
            .map_err(|e| match e {
                SubjectRepositoryError::NotFound => GetSubjectDetailError::SubjectNotFound,
                SubjectRepositoryError::DatabaseError(msg) => {
                    GetSubjectDetailError::RepositoryError(msg)
                }
            })?;

        let topics = self
            .topics
            .list_for_subject(subject_id)
            .await
            .map_err(|e| GetSubjectDetailError::RepositoryError(e.to_string()))?;

        let materials = self
            .materials
            .list_for_subject(subject_id)
            .await
            .map_err(|e| GetSubjectDetailError::RepositoryError(e.to_string()))?;

        // One name lookup covers the teacher and every uploader.
        let mut name_ids: HashSet<UserId> = materials.iter().filter_map(|m| m.uploaded_by).collect();
        if let Some(teacher_id) = subject.teacher_id {
            name_ids.insert(teacher_id);
        }
        let name_ids: Vec<UserId> = name_ids.into_iter().collect();

        let names = self
            .users
            .display_names(&name_ids)
            .await
            .map_err(|e| GetSubjectDetailError::RepositoryError(e.to_string()))?;

        let teacher_name = subject.teacher_id.and_then(|id| names.get(&id).cloned());

        let lessons_total = materials.len() as u64;
        let lessons_completed = self
            .completion
            .completed_lessons(subject_id)
            .await
            .map_err(|e| GetSubjectDetailError::RepositoryError(e.to_string()))?;

        let materials = materials
            .into_iter()
            .map(|material| MaterialWithUploader {
                uploader_name: material.uploaded_by.and_then(|id| names.get(&id).cloned()),
                material,
            })
            .collect();

        Ok(SubjectDetail {
            subject,
            teacher_name,
            topics,
            materials,
            lessons_total,
            lessons_completed,
            progress_pct: progress_pct(lessons_completed, lessons_total),
        })
    }
}
