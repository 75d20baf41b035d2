pub mod completion_source;
pub mod material_repository;
pub mod subject_repository;
pub mod topic_repository;

pub use completion_source::{CompletionSource, CompletionSourceError, NoCompletionTracking};
pub use material_repository::{CreateMaterialData, MaterialRepository, MaterialRepositoryError};
pub use subject_repository::{
    CreateSubjectData, PatchField, PatchSubjectData, SubjectFilter, SubjectRepository,
    SubjectRepositoryError,
};
pub use topic_repository::{CreateTopicData, TopicRepository, TopicRepositoryError};
