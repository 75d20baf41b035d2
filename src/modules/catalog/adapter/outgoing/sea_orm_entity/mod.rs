pub mod course_materials;
pub mod subjects;
pub mod topics;
