//! In-memory port implementations for wiring whole use-case flows
//! without a database or a filesystem.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::assets::application::domain::entities::{AssetId, FileUpload};
use crate::assets::application::ports::outgoing::asset_store::{AssetStore, AssetStoreError};
use crate::catalog::application::domain::entities::{CourseMaterial, Subject, Topic};
use crate::catalog::application::ports::outgoing::material_repository::{
    CreateMaterialData, MaterialRepository, MaterialRepositoryError,
};
use crate::catalog::application::ports::outgoing::subject_repository::{
    CreateSubjectData, PatchField, PatchSubjectData, SubjectFilter, SubjectRepository,
    SubjectRepositoryError,
};
use crate::catalog::application::ports::outgoing::topic_repository::{
    CreateTopicData, TopicRepository, TopicRepositoryError,
};
use crate::users::application::domain::entities::UserId;
use crate::users::application::ports::outgoing::user_directory::{
    UserDirectory, UserDirectoryError,
};

// ============================================================================
// Catalog store
// ============================================================================

#[derive(Default)]
struct CatalogState {
    subjects: Vec<Subject>,
    topics: Vec<Topic>,
    materials: Vec<CourseMaterial>,
}

/// One shared store implementing all three catalog repository ports, so the
/// services under test observe each other's writes.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<Mutex<CatalogState>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subject_count(&self) -> usize {
        self.state.lock().unwrap().subjects.len()
    }

    pub fn material_count(&self) -> usize {
        self.state.lock().unwrap().materials.len()
    }

    pub fn topic_count(&self) -> usize {
        self.state.lock().unwrap().topics.len()
    }
}

#[async_trait]
impl SubjectRepository for InMemoryCatalog {
    async fn insert_subject(
        &self,
        data: CreateSubjectData,
    ) -> Result<Subject, SubjectRepositoryError> {
        let now = Utc::now();
        let subject = Subject {
            id: Uuid::new_v4(),
            name: data.name.trim().to_string(),
            code: data.code.trim().to_string(),
            grade_id: data.grade_id,
            description: data.description,
            duration_weeks: data.duration_weeks,
            teacher_id: data.teacher_id,
            created_at: now,
            updated_at: now,
        };

        self.state.lock().unwrap().subjects.push(subject.clone());

        Ok(subject)
    }

    async fn find_subject(&self, subject_id: Uuid) -> Result<Subject, SubjectRepositoryError> {
        self.state
            .lock()
            .unwrap()
            .subjects
            .iter()
            .find(|s| s.id == subject_id)
            .cloned()
            .ok_or(SubjectRepositoryError::NotFound)
    }

    async fn list_subjects(
        &self,
        filter: &SubjectFilter,
    ) -> Result<Vec<Subject>, SubjectRepositoryError> {
        let state = self.state.lock().unwrap();

        let mut subjects: Vec<Subject> = state
            .subjects
            .iter()
            .filter(|s| {
                filter
                    .grade_id
                    .as_ref()
                    .map(|g| &s.grade_id == g)
                    .unwrap_or(true)
            })
            .filter(|s| {
                filter
                    .search
                    .as_ref()
                    .map(|term| s.name.to_lowercase().contains(&term.to_lowercase()))
                    .unwrap_or(true)
            })
            .cloned()
            .collect();

        subjects.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(subjects)
    }

    async fn patch_subject(
        &self,
        subject_id: Uuid,
        data: PatchSubjectData,
    ) -> Result<Subject, SubjectRepositoryError> {
        let mut state = self.state.lock().unwrap();

        let subject = state
            .subjects
            .iter_mut()
            .find(|s| s.id == subject_id)
            .ok_or(SubjectRepositoryError::NotFound)?;

        if let PatchField::Value(name) = data.name {
            subject.name = name.trim().to_string();
        }

        if let PatchField::Value(grade_id) = data.grade_id {
            subject.grade_id = grade_id;
        }

        match data.description {
            PatchField::Unset => {}
            PatchField::Null => subject.description = None,
            PatchField::Value(desc) => subject.description = Some(desc),
        }

        match data.duration_weeks {
            PatchField::Unset => {}
            PatchField::Null => subject.duration_weeks = None,
            PatchField::Value(weeks) => subject.duration_weeks = Some(weeks),
        }

        match data.teacher_id {
            PatchField::Unset => {}
            PatchField::Null => subject.teacher_id = None,
            PatchField::Value(teacher) => subject.teacher_id = Some(teacher),
        }

        subject.updated_at = Utc::now();

        Ok(subject.clone())
    }

    async fn delete_subject_cascade(
        &self,
        subject_id: Uuid,
    ) -> Result<(), SubjectRepositoryError> {
        let mut state = self.state.lock().unwrap();

        if !state.subjects.iter().any(|s| s.id == subject_id) {
            return Err(SubjectRepositoryError::NotFound);
        }

        state.materials.retain(|m| m.subject_id != subject_id);
        state.topics.retain(|t| t.subject_id != subject_id);
        state.subjects.retain(|s| s.id != subject_id);

        Ok(())
    }
}

#[async_trait]
impl TopicRepository for InMemoryCatalog {
    async fn insert_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError> {
        let topic = Topic {
            id: Uuid::new_v4(),
            subject_id: data.subject_id,
            name: data.name.trim().to_string(),
            created_at: Utc::now(),
        };

        self.state.lock().unwrap().topics.push(topic.clone());

        Ok(topic)
    }

    async fn find_topic(&self, topic_id: Uuid) -> Result<Topic, TopicRepositoryError> {
        self.state
            .lock()
            .unwrap()
            .topics
            .iter()
            .find(|t| t.id == topic_id)
            .cloned()
            .ok_or(TopicRepositoryError::NotFound)
    }

    async fn list_for_subject(
        &self,
        subject_id: Uuid,
    ) -> Result<Vec<Topic>, TopicRepositoryError> {
        let mut topics: Vec<Topic> = self
            .state
            .lock()
            .unwrap()
            .topics
            .iter()
            .filter(|t| t.subject_id == subject_id)
            .cloned()
            .collect();

        topics.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(topics)
    }

    async fn delete_topic_cascade(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();

        if !state.topics.iter().any(|t| t.id == topic_id) {
            return Err(TopicRepositoryError::NotFound);
        }

        state.materials.retain(|m| m.topic_id != Some(topic_id));
        state.topics.retain(|t| t.id != topic_id);

        Ok(())
    }
}

#[async_trait]
impl MaterialRepository for InMemoryCatalog {
    async fn insert_material(
        &self,
        data: CreateMaterialData,
    ) -> Result<CourseMaterial, MaterialRepositoryError> {
        let material = CourseMaterial {
            id: Uuid::new_v4(),
            subject_id: data.subject_id,
            topic_id: data.topic_id,
            title: data.title.trim().to_string(),
            description: data.description,
            file_url: data.file_url,
            uploaded_by: data.uploaded_by,
            created_at: Utc::now(),
        };

        self.state.lock().unwrap().materials.push(material.clone());

        Ok(material)
    }

    async fn find_material(
        &self,
        material_id: Uuid,
    ) -> Result<CourseMaterial, MaterialRepositoryError> {
        self.state
            .lock()
            .unwrap()
            .materials
            .iter()
            .find(|m| m.id == material_id)
            .cloned()
            .ok_or(MaterialRepositoryError::NotFound)
    }

    async fn list_for_subject(
        &self,
        subject_id: Uuid,
    ) -> Result<Vec<CourseMaterial>, MaterialRepositoryError> {
        // Newest first, matching the Postgres adapter's ordering.
        Ok(self
            .state
            .lock()
            .unwrap()
            .materials
            .iter()
            .rev()
            .filter(|m| m.subject_id == subject_id)
            .cloned()
            .collect())
    }

    async fn list_for_topic(
        &self,
        topic_id: Uuid,
    ) -> Result<Vec<CourseMaterial>, MaterialRepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .materials
            .iter()
            .rev()
            .filter(|m| m.topic_id == Some(topic_id))
            .cloned()
            .collect())
    }

    async fn count_by_subject(
        &self,
        subject_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, u64>, MaterialRepositoryError> {
        let state = self.state.lock().unwrap();

        let mut counts = HashMap::new();
        for material in &state.materials {
            if subject_ids.contains(&material.subject_id) {
                *counts.entry(material.subject_id).or_insert(0) += 1;
            }
        }

        Ok(counts)
    }

    async fn delete_material(&self, material_id: Uuid) -> Result<(), MaterialRepositoryError> {
        let mut state = self.state.lock().unwrap();

        let before = state.materials.len();
        state.materials.retain(|m| m.id != material_id);

        if state.materials.len() == before {
            return Err(MaterialRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Asset store
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryAssetStore {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    pub fn contains(&self, asset_id: &AssetId) -> bool {
        self.files.lock().unwrap().contains_key(asset_id.as_str())
    }
}

#[async_trait]
impl AssetStore for InMemoryAssetStore {
    async fn store(&self, upload: &FileUpload) -> Result<AssetId, AssetStoreError> {
        let name = match upload.sanitized_extension() {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };

        self.files
            .lock()
            .unwrap()
            .insert(name.clone(), upload.bytes.clone());

        Ok(AssetId::new(name))
    }

    fn public_url(&self, asset_id: &AssetId) -> String {
        format!("/uploads/{asset_id}")
    }

    async fn remove(&self, asset_id: &AssetId) -> Result<(), AssetStoreError> {
        self.files.lock().unwrap().remove(asset_id.as_str());
        Ok(())
    }
}

// ============================================================================
// User directory
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Arc<Mutex<HashMap<UserId, String>>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, name: &str) -> UserId {
        let id = UserId::from(Uuid::new_v4());
        self.users.lock().unwrap().insert(id, name.to_string());
        id
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn user_exists(&self, user_id: UserId) -> Result<bool, UserDirectoryError> {
        Ok(self.users.lock().unwrap().contains_key(&user_id))
    }

    async fn display_names(
        &self,
        user_ids: &[UserId],
    ) -> Result<HashMap<UserId, String>, UserDirectoryError> {
        let users = self.users.lock().unwrap();

        Ok(user_ids
            .iter()
            .filter_map(|id| users.get(id).map(|name| (*id, name.clone())))
            .collect())
    }
}
