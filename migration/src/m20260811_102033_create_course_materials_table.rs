use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseMaterials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseMaterials::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    // Denormalized on purpose: subject-level listings read
                    // this column without joining through topics.
                    .col(ColumnDef::new(CourseMaterials::SubjectId).uuid().not_null())
                    .col(ColumnDef::new(CourseMaterials::TopicId).uuid())
                    .col(
                        ColumnDef::new(CourseMaterials::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseMaterials::Description).text())
                    .col(ColumnDef::new(CourseMaterials::FileUrl).text().not_null())
                    // No FK: uploader accounts may be removed externally.
                    .col(ColumnDef::new(CourseMaterials::UploadedBy).uuid())
                    .col(
                        ColumnDef::new(CourseMaterials::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_materials_subject_id")
                            .from(CourseMaterials::Table, CourseMaterials::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_materials_topic_id")
                            .from(CourseMaterials::Table, CourseMaterials::TopicId)
                            .to(Topics::Table, Topics::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Subject-level listings and per-subject lesson counts
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_course_materials_subject_id
                ON course_materials (subject_id, created_at DESC);
                "#,
            )
            .await?;

        // Topic-level listings
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_course_materials_topic_id
                ON course_materials (topic_id)
                WHERE topic_id IS NOT NULL;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_course_materials_subject_id;
                DROP INDEX IF EXISTS idx_course_materials_topic_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CourseMaterials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CourseMaterials {
    Table,
    Id,
    SubjectId,
    TopicId,
    Title,
    Description,
    FileUrl,
    UploadedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Subjects {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
}
