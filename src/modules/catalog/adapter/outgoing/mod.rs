pub mod material_repository_postgres;
pub mod sea_orm_entity;
pub mod subject_repository_postgres;
pub mod topic_repository_postgres;

pub use material_repository_postgres::MaterialRepositoryPostgres;
pub use subject_repository_postgres::SubjectRepositoryPostgres;
pub use topic_repository_postgres::TopicRepositoryPostgres;
