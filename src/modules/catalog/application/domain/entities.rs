use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::users::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// Core entities
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    /// Opaque grade/level reference, owned by the grades subsystem.
    pub grade_id: String,
    pub description: Option<String>,
    pub duration_weeks: Option<u32>,
    pub teacher_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Topic {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A file-backed resource attached to a Subject and optionally a Topic.
///
/// `subject_id` is always populated, even for topic uploads: subject-level
/// listings read it directly. When `topic_id` is present it refers to a
/// topic of the same subject.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CourseMaterial {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub topic_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    /// Public URL resolved by the asset store at upload time. Rows never
    /// reference internal storage paths.
    pub file_url: String,
    pub uploaded_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Read models
// ──────────────────────────────────────────────────────────
//

/// One row of the subject list: the subject plus resolved teacher name
/// and lesson/progress figures.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectOverview {
    pub subject: Subject,
    pub teacher_name: Option<String>,
    pub lessons_total: u64,
    pub lessons_completed: u64,
    pub progress_pct: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct MaterialWithUploader {
    pub material: CourseMaterial,
    pub uploader_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectDetail {
    pub subject: Subject,
    pub teacher_name: Option<String>,
    pub topics: Vec<Topic>,
    pub materials: Vec<MaterialWithUploader>,
    pub lessons_total: u64,
    pub lessons_completed: u64,
    pub progress_pct: u8,
}

/// `round(100 * completed / total)`, with an empty subject pinned to 0.
/// Capped at 100 so an over-reporting completion source cannot push a
/// subject past full.
pub fn progress_pct(completed: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }

    ((100.0 * completed as f64) / total as f64).round().min(100.0) as u8
}
