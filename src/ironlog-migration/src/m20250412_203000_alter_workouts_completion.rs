use sea_orm_migration::prelude::*;

use crate::m20250302_180000_workouts::Workouts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Sqlite only takes one column per ALTER
        manager
            .alter_table(
                Table::alter()
                    .table(Workouts::Table)
                    .add_column(
                        ColumnDef::new(WorkoutCompletion::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Workouts::Table)
                    .add_column(
                        ColumnDef::new(WorkoutCompletion::CompletedAt)
                            .date_time()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Workouts::Table)
                    .drop_column(WorkoutCompletion::CompletedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Workouts::Table)
                    .drop_column(WorkoutCompletion::IsCompleted)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum WorkoutCompletion {
    IsCompleted,
    CompletedAt,
}
