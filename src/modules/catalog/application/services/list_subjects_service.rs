use async_trait::async_trait;
use std::collections::HashSet;

use crate::modules::catalog::application::domain::entities::{progress_pct, SubjectOverview};
use crate::modules::catalog::application::ports::incoming::use_cases::{
    ListSubjectsError, ListSubjectsUseCase,
};
use crate::modules::catalog::application::ports::outgoing::{
    CompletionSource, MaterialRepository, SubjectFilter, SubjectRepository,
};
use crate::modules::users::application::domain::entities::UserId;
use crate::modules::users::application::ports::outgoing::user_directory::UserDirectory;

pub struct ListSubjectsService<R, M, U, C>
where
    R: SubjectRepository,
    M: MaterialRepository,
    U: UserDirectory,
    C: CompletionSource,
{
    subjects: R,
    materials: M,
    users: U,
    completion: C,
}

impl<R, M, U, C> ListSubjectsService<R, M, U, C>
where
    R: SubjectRepository,
    M: MaterialRepository,
    U: UserDirectory,
    C: CompletionSource,
{
    pub fn new(subjects: R, materials: M, users: U, completion: C) -> Self {
        Self {
            subjects,
            materials,
            users,
            completion,
        }
    }
}

#[async_trait]
impl<R, M, U, C> ListSubjectsUseCase for ListSubjectsService<R, M, U, C>
where
    R: SubjectRepository + Send + Sync,
    M: MaterialRepository + Send + Sync,
    U: UserDirectory + Send + Sync,
    C: CompletionSource + Send + Sync,
{
    async fn execute(
        &self,
        filter: SubjectFilter,
    ) -> Result<Vec<SubjectOverview>, ListSubjectsError> {
        let subjects = self
            .subjects
            .list_subjects(&filter)
            .await
            .map_err(|e| ListSubjectsError::RepositoryError(e.to_string()))?;

        let subject_ids: Vec<_> = subjects.iter().map(|s| s.id).collect();
        let lesson_counts = self
            .materials
            .count_by_subject(&subject_ids)
            .await
            .map_err(|e| ListSubjectsError::RepositoryError(e.to_string()))?;

        let teacher_ids: Vec<UserId> = subjects
            .iter()
            .filter_map(|s| s.teacher_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let teacher_names = self
            .users
            .display_names(&teacher_ids)
            .await
            .map_err(|e| ListSubjectsError::RepositoryError(e.to_string()))?;

        let mut overviews = Vec::with_capacity(subjects.len());
        for subject in subjects {
            let lessons_total = lesson_counts.get(&subject.id).copied().unwrap_or(0);
            let lessons_completed = self
                .completion
                .completed_lessons(subject.id)
                .await
                .map_err(|e| ListSubjectsError::RepositoryError(e.to_string()))?;

            let teacher_name = subject
                .teacher_id
                .and_then(|id| teacher_names.get(&id).cloned());

            overviews.push(SubjectOverview {
                progress_pct: progress_pct(lessons_completed, lessons_total),
                subject,
                teacher_name,
                lessons_total,
                lessons_completed,
            });
        }

        Ok(overviews)
    }
}
