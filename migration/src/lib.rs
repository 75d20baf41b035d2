pub use sea_orm_migration::prelude::*;

mod m20260810_091500_create_users_table;
mod m20260810_092210_create_subjects_table;
mod m20260811_101405_create_topics_table;
mod m20260811_102033_create_course_materials_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_091500_create_users_table::Migration),
            Box::new(m20260810_092210_create_subjects_table::Migration),
            Box::new(m20260811_101405_create_topics_table::Migration),
            Box::new(m20260811_102033_create_course_materials_table::Migration),
        ]
    }
}
