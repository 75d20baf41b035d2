pub mod add_topic_service;
pub mod create_subject_service;
pub mod delete_material_service;
pub mod delete_subject_service;
pub mod get_subject_detail_service;
pub mod list_subjects_service;
pub mod remove_topic_service;
pub mod update_subject_service;
pub mod upload_to_subject_service;
pub mod upload_to_topic_service;

pub use add_topic_service::AddTopicService;
pub use create_subject_service::CreateSubjectService;
pub use delete_material_service::DeleteMaterialService;
pub use delete_subject_service::DeleteSubjectService;
pub use get_subject_detail_service::GetSubjectDetailService;
pub use list_subjects_service::ListSubjectsService;
pub use remove_topic_service::RemoveTopicService;
pub use update_subject_service::UpdateSubjectService;
pub use upload_to_subject_service::UploadToSubjectService;
pub use upload_to_topic_service::UploadToTopicService;
