//! End-to-end catalog flows wired over in-memory ports: every service sees
//! the same store, so cross-service effects (cascades, asset cleanup,
//! listings) are observable.

use uuid::Uuid;

use crate::assets::application::domain::entities::{AssetId, FileUpload};
use crate::assets::application::domain::policies::upload_policy::UploadPolicy;
use crate::catalog::application::ports::incoming::use_cases::{
    AddTopicUseCase, CreateSubjectUseCase, DeleteMaterialUseCase, DeleteSubjectUseCase,
    GetSubjectDetailError, GetSubjectDetailUseCase, ListSubjectsUseCase, MaterialMeta,
    RemoveTopicUseCase, UpdateSubjectUseCase, UploadMaterialToSubjectUseCase,
    UploadMaterialToTopicUseCase,
};
use crate::catalog::application::ports::outgoing::completion_source::NoCompletionTracking;
use crate::catalog::application::ports::outgoing::subject_repository::{
    CreateSubjectData, PatchField, PatchSubjectData, SubjectFilter,
};
use crate::catalog::application::services::{
    AddTopicService, CreateSubjectService, DeleteMaterialService, DeleteSubjectService,
    GetSubjectDetailService, ListSubjectsService, RemoveTopicService, UpdateSubjectService,
    UploadToSubjectService, UploadToTopicService,
};
use crate::tests::support::memory::{InMemoryAssetStore, InMemoryCatalog, InMemoryUserDirectory};

fn upload_policy() -> UploadPolicy {
    UploadPolicy::new("/uploads".to_string(), "uploads".to_string())
}

fn pdf(file_name: &str) -> FileUpload {
    FileUpload {
        file_name: file_name.to_string(),
        content_type: "application/pdf".to_string(),
        bytes: vec![0x25, 0x50, 0x44, 0x46],
    }
}

fn meta(title: &str) -> MaterialMeta {
    MaterialMeta {
        title: title.to_string(),
        description: None,
        uploaded_by: None,
    }
}

fn subject_data(name: &str, code: &str, grade: &str) -> CreateSubjectData {
    CreateSubjectData {
        name: name.to_string(),
        code: code.to_string(),
        grade_id: grade.to_string(),
        description: None,
        duration_weeks: Some(12),
        teacher_id: None,
    }
}

#[tokio::test]
async fn full_subject_lifecycle() {
    let catalog = InMemoryCatalog::new();
    let assets = InMemoryAssetStore::new();
    let users = InMemoryUserDirectory::new();
    let teacher_id = users.add_user("Grace Obi");

    let create = CreateSubjectService::new(catalog.clone(), users.clone());
    let detail = GetSubjectDetailService::new(
        catalog.clone(),
        catalog.clone(),
        catalog.clone(),
        users.clone(),
        NoCompletionTracking,
    );
    let add_topic = AddTopicService::new(catalog.clone(), catalog.clone());
    let upload_to_topic = UploadToTopicService::new(
        catalog.clone(),
        catalog.clone(),
        assets.clone(),
        upload_policy(),
    );
    let delete_subject =
        DeleteSubjectService::new(catalog.clone(), catalog.clone(), assets.clone());

    // Create a subject with an assigned teacher
    let mut data = subject_data("Mathematics", "SS0123", "S1");
    data.teacher_id = Some(teacher_id);
    let subject = create.execute(data).await.unwrap();

    // Fresh subject: no topics, no materials, progress pinned to zero
    let fresh = detail.execute(subject.id).await.unwrap();
    assert_eq!(fresh.teacher_name.as_deref(), Some("Grace Obi"));
    assert!(fresh.topics.is_empty());
    assert!(fresh.materials.is_empty());
    assert_eq!(fresh.lessons_total, 0);
    assert_eq!(fresh.progress_pct, 0);

    // Add a topic and attach a material to it
    let topic = add_topic
        .execute(subject.id, "Calculus".to_string())
        .await
        .unwrap();

    let material = upload_to_topic
        .execute(topic.id, pdf("chapter-1.pdf"), meta("Chapter 1"))
        .await
        .unwrap();

    assert_eq!(material.subject_id, subject.id);
    assert_eq!(material.topic_id, Some(topic.id));
    assert!(material.file_url.starts_with("/uploads/"));
    assert_eq!(assets.file_count(), 1);

    // The topic material counts as a lesson of its owning subject
    let populated = detail.execute(subject.id).await.unwrap();
    assert_eq!(populated.topics.len(), 1);
    assert_eq!(populated.materials.len(), 1);
    assert_eq!(populated.lessons_total, 1);
    assert_eq!(populated.materials[0].material.id, material.id);

    // Cascade delete: subject, topic, material rows and the stored file
    delete_subject.execute(subject.id).await.unwrap();

    assert!(matches!(
        detail.execute(subject.id).await,
        Err(GetSubjectDetailError::SubjectNotFound)
    ));
    assert_eq!(catalog.subject_count(), 0);
    assert_eq!(catalog.topic_count(), 0);
    assert_eq!(catalog.material_count(), 0);
    assert_eq!(assets.file_count(), 0);
}

#[tokio::test]
async fn listing_resolves_teachers_and_lesson_counts() {
    let catalog = InMemoryCatalog::new();
    let assets = InMemoryAssetStore::new();
    let users = InMemoryUserDirectory::new();
    let teacher_id = users.add_user("Ada Eze");

    let create = CreateSubjectService::new(catalog.clone(), users.clone());
    let upload = UploadToSubjectService::new(
        catalog.clone(),
        catalog.clone(),
        assets.clone(),
        upload_policy(),
    );
    let list = ListSubjectsService::new(
        catalog.clone(),
        catalog.clone(),
        users.clone(),
        NoCompletionTracking,
    );

    let mut maths = subject_data("Mathematics", "SS0123", "S1");
    maths.teacher_id = Some(teacher_id);
    let maths = create.execute(maths).await.unwrap();
    let biology = create
        .execute(subject_data("Biology", "BI0001", "S2"))
        .await
        .unwrap();

    upload
        .execute(maths.id, pdf("a.pdf"), meta("Chapter 1"))
        .await
        .unwrap();
    upload
        .execute(maths.id, pdf("b.pdf"), meta("Chapter 2"))
        .await
        .unwrap();

    // Unfiltered: ordered by name, counts and names resolved per subject
    let overviews = list.execute(SubjectFilter::default()).await.unwrap();
    assert_eq!(overviews.len(), 2);
    assert_eq!(overviews[0].subject.id, biology.id);
    assert_eq!(overviews[0].lessons_total, 0);
    assert!(overviews[0].teacher_name.is_none());
    assert_eq!(overviews[1].subject.id, maths.id);
    assert_eq!(overviews[1].lessons_total, 2);
    assert_eq!(overviews[1].teacher_name.as_deref(), Some("Ada Eze"));
    assert_eq!(overviews[1].progress_pct, 0);

    // Grade filter and case-insensitive search combine with AND
    let filtered = list
        .execute(SubjectFilter {
            grade_id: Some("S1".to_string()),
            search: Some("math".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].subject.id, maths.id);
}

#[tokio::test]
async fn reassigning_and_unassigning_a_teacher() {
    let catalog = InMemoryCatalog::new();
    let users = InMemoryUserDirectory::new();
    let first = users.add_user("Grace Obi");
    let second = users.add_user("Ada Eze");

    let create = CreateSubjectService::new(catalog.clone(), users.clone());
    let update = UpdateSubjectService::new(catalog.clone(), users.clone());

    let mut data = subject_data("Physics", "PH0001", "S3");
    data.teacher_id = Some(first);
    let subject = create.execute(data).await.unwrap();

    let reassigned = update
        .execute(
            subject.id,
            PatchSubjectData {
                teacher_id: PatchField::Value(second),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(reassigned.teacher_id, Some(second));

    let unassigned = update
        .execute(
            subject.id,
            PatchSubjectData {
                teacher_id: PatchField::Null,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(unassigned.teacher_id.is_none());
}

#[tokio::test]
async fn removing_a_topic_keeps_sibling_materials() {
    let catalog = InMemoryCatalog::new();
    let assets = InMemoryAssetStore::new();
    let users = InMemoryUserDirectory::new();

    let create = CreateSubjectService::new(catalog.clone(), users.clone());
    let add_topic = AddTopicService::new(catalog.clone(), catalog.clone());
    let upload_to_topic = UploadToTopicService::new(
        catalog.clone(),
        catalog.clone(),
        assets.clone(),
        upload_policy(),
    );
    let upload_to_subject = UploadToSubjectService::new(
        catalog.clone(),
        catalog.clone(),
        assets.clone(),
        upload_policy(),
    );
    let remove_topic =
        RemoveTopicService::new(catalog.clone(), catalog.clone(), assets.clone());

    let subject = create
        .execute(subject_data("Chemistry", "CH0001", "S2"))
        .await
        .unwrap();
    let topic = add_topic
        .execute(subject.id, "Organic".to_string())
        .await
        .unwrap();

    let topic_material = upload_to_topic
        .execute(topic.id, pdf("organic.pdf"), meta("Organic notes"))
        .await
        .unwrap();
    let subject_material = upload_to_subject
        .execute(subject.id, pdf("syllabus.pdf"), meta("Syllabus"))
        .await
        .unwrap();

    remove_topic.execute(topic.id).await.unwrap();

    // Only the topic's material and its file are gone
    assert_eq!(catalog.material_count(), 1);
    assert_eq!(assets.file_count(), 1);

    let topic_asset = AssetId::from_public_url(&topic_material.file_url).unwrap();
    let subject_asset = AssetId::from_public_url(&subject_material.file_url).unwrap();
    assert!(!assets.contains(&topic_asset));
    assert!(assets.contains(&subject_asset));
}

#[tokio::test]
async fn deleting_one_material_leaves_the_rest() {
    let catalog = InMemoryCatalog::new();
    let assets = InMemoryAssetStore::new();
    let users = InMemoryUserDirectory::new();

    let create = CreateSubjectService::new(catalog.clone(), users.clone());
    let upload = UploadToSubjectService::new(
        catalog.clone(),
        catalog.clone(),
        assets.clone(),
        upload_policy(),
    );
    let delete_material = DeleteMaterialService::new(catalog.clone(), assets.clone());

    let subject = create
        .execute(subject_data("History", "HI0001", "S1"))
        .await
        .unwrap();

    let first = upload
        .execute(subject.id, pdf("one.pdf"), meta("One"))
        .await
        .unwrap();
    let second = upload
        .execute(subject.id, pdf("two.pdf"), meta("Two"))
        .await
        .unwrap();

    delete_material.execute(first.id).await.unwrap();

    assert_eq!(catalog.material_count(), 1);
    assert_eq!(assets.file_count(), 1);

    let remaining = AssetId::from_public_url(&second.file_url).unwrap();
    assert!(assets.contains(&remaining));
}

#[tokio::test]
async fn upload_to_unknown_subject_stores_nothing() {
    let catalog = InMemoryCatalog::new();
    let assets = InMemoryAssetStore::new();

    let upload = UploadToSubjectService::new(
        catalog.clone(),
        catalog.clone(),
        assets.clone(),
        upload_policy(),
    );

    let result = upload
        .execute(Uuid::new_v4(), pdf("orphan.pdf"), meta("Orphan"))
        .await;

    assert!(result.is_err());
    assert_eq!(assets.file_count(), 0);
    assert_eq!(catalog.material_count(), 0);
}
