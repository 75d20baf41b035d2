use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::SubjectOverview;
use crate::modules::catalog::application::ports::outgoing::subject_repository::SubjectFilter;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSubjectsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListSubjectsUseCase: Send + Sync {
    /// Subjects matching the filter, name ascending, with teacher names
    /// resolved and lesson/progress figures computed.
    async fn execute(&self, filter: SubjectFilter)
        -> Result<Vec<SubjectOverview>, ListSubjectsError>;
}
