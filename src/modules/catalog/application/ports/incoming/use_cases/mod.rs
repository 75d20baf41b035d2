pub mod add_topic;
pub mod create_subject;
pub mod delete_material;
pub mod delete_subject;
pub mod get_subject_detail;
pub mod list_subjects;
pub mod remove_topic;
pub mod update_subject;
pub mod upload_material;

pub use add_topic::{AddTopicError, AddTopicUseCase};
pub use create_subject::{CreateSubjectError, CreateSubjectUseCase};
pub use delete_material::{DeleteMaterialError, DeleteMaterialUseCase};
pub use delete_subject::{DeleteSubjectError, DeleteSubjectUseCase};
pub use get_subject_detail::{GetSubjectDetailError, GetSubjectDetailUseCase};
pub use list_subjects::{ListSubjectsError, ListSubjectsUseCase};
pub use remove_topic::{RemoveTopicError, RemoveTopicUseCase};
pub use update_subject::{UpdateSubjectError, UpdateSubjectUseCase};
pub use upload_material::{
    MaterialMeta, UploadMaterialError, UploadMaterialToSubjectUseCase, UploadMaterialToTopicUseCase,
};
