use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::Subject;
use crate::modules::users::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep DB value
// - Null: explicitly null => set DB column NULL (only for nullable fields)
// - Value(v): replace with v
//
// Serde behavior (recommended usage):
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, PatchField::Value(_))
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateSubjectData {
    pub name: String,
    /// Human-readable code, set once at creation time.
    pub code: String,
    pub grade_id: String,
    pub description: Option<String>,
    pub duration_weeks: Option<u32>,
    pub teacher_id: Option<UserId>,
}

/// Patch semantics:
/// - name/grade_id: Unset => keep, Value => replace (never Null)
/// - description/duration_weeks: Unset => keep, Null => clear, Value => set
/// - teacher_id: Unset => keep assignment, Null => unassign, Value => reassign
#[derive(Debug, Clone, Default)]
pub struct PatchSubjectData {
    pub name: PatchField<String>,
    pub grade_id: PatchField<String>,
    pub description: PatchField<String>,
    pub duration_weeks: PatchField<u32>,
    pub teacher_id: PatchField<UserId>,
}

/// Filter for subject listings. Both legs are optional and combine with AND.
#[derive(Debug, Clone, Default)]
pub struct SubjectFilter {
    pub grade_id: Option<String>,
    /// Case-insensitive substring match on the subject name.
    pub search: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubjectRepositoryError {
    #[error("Subject not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubjectRepository: Send + Sync {
    async fn insert_subject(
        &self,
        data: CreateSubjectData,
    ) -> Result<Subject, SubjectRepositoryError>;

    async fn find_subject(&self, subject_id: Uuid) -> Result<Subject, SubjectRepositoryError>;

    /// Subjects matching the filter, ordered by name ascending.
    async fn list_subjects(
        &self,
        filter: &SubjectFilter,
    ) -> Result<Vec<Subject>, SubjectRepositoryError>;

    async fn patch_subject(
        &self,
        subject_id: Uuid,
        data: PatchSubjectData,
    ) -> Result<Subject, SubjectRepositoryError>;

    /// Deletes the subject together with its topics and course materials,
    /// inside a single transaction: materials first, then topics, then the
    /// subject row. A partial cascade must never be committed.
    async fn delete_subject_cascade(&self, subject_id: Uuid)
        -> Result<(), SubjectRepositoryError>;
}
