use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CompletionSourceError {
    #[error("Completion data unavailable: {0}")]
    Unavailable(String),
}

/// Source of "completed lessons" figures for progress computation.
///
/// Per-user completion tracking does not exist yet; the seam is here so
/// the progress formula doesn't hardcode a zero. Swap the implementation
/// once a tracking model lands.
#[async_trait]
pub trait CompletionSource: Send + Sync {
    async fn completed_lessons(&self, subject_id: Uuid) -> Result<u64, CompletionSourceError>;
}

/// Default implementation: no tracking model, every subject reports zero
/// completed lessons.
#[derive(Debug, Clone, Default)]
pub struct NoCompletionTracking;

#[async_trait]
impl CompletionSource for NoCompletionTracking {
    async fn completed_lessons(&self, _subject_id: Uuid) -> Result<u64, CompletionSourceError> {
        Ok(0)
    }
}
