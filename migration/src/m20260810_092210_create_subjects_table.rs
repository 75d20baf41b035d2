use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create subjects table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Subjects::Name).string_len(150).not_null())
                    .col(ColumnDef::new(Subjects::Code).string_len(50).not_null())
                    // Opaque reference into the grades subsystem, no FK here.
                    .col(ColumnDef::new(Subjects::GradeId).string_len(50).not_null())
                    .col(ColumnDef::new(Subjects::Description).text())
                    .col(ColumnDef::new(Subjects::DurationWeeks).integer())
                    // No FK: teachers live in the identity service and may be
                    // deleted there without touching the catalog.
                    .col(ColumnDef::new(Subjects::TeacherId).uuid())
                    .col(
                        ColumnDef::new(Subjects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Subjects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Grade filter on listings
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_subjects_grade_id
                ON subjects (grade_id);
                "#,
            )
            .await?;

        // Case-insensitive name search
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_subjects_name_lower
                ON subjects (lower(name));
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = CURRENT_TIMESTAMP;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_subjects_updated_at
                BEFORE UPDATE ON subjects
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
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
                DROP TRIGGER IF EXISTS update_subjects_updated_at ON subjects;
                DROP FUNCTION IF EXISTS update_updated_at_column;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_subjects_grade_id;
                DROP INDEX IF EXISTS idx_subjects_name_lower;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Subjects {
    Table,
    Id,
    Name,
    Code,
    GradeId,
    Description,
    DurationWeeks,
    TeacherId,
    CreatedAt,
    UpdatedAt,
}
