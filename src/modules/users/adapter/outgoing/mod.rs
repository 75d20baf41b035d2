pub mod sea_orm_entity;
pub mod user_directory_postgres;
