use sea_orm_migration::prelude::*;

use crate::{m20250301_090000_users::Users, m20250301_091500_exercises::Exercises};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workouts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Workouts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Workouts::UserId).integer().not_null())
                    .col(ColumnDef::new(Workouts::Date).date_time().not_null())
                    .col(ColumnDef::new(Workouts::Note).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workouts_users")
                            .from(Workouts::Table, Workouts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WorkoutExercises::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkoutExercises::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WorkoutExercises::WorkoutId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkoutExercises::ExerciseId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkoutExercises::OrderIndex)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workout_exercises_workouts")
                            .from(WorkoutExercises::Table, WorkoutExercises::WorkoutId)
                            .to(Workouts::Table, Workouts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workout_exercises_exercises")
                            .from(WorkoutExercises::Table, WorkoutExercises::ExerciseId)
                            .to(Exercises::Table, Exercises::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Sets::WorkoutExerciseId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Sets::SetIndex).integer().not_null())
                    .col(ColumnDef::new(Sets::Weight).double().null())
                    .col(ColumnDef::new(Sets::Reps).integer().null())
                    .col(ColumnDef::new(Sets::Rpe).integer().null())
                    .col(
                        ColumnDef::new(Sets::IsWarmup)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Sets::Note).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sets_workout_exercises")
                            .from(Sets::Table, Sets::WorkoutExerciseId)
                            .to(WorkoutExercises::Table, WorkoutExercises::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("workouts-user-date-index")
                    .table(Workouts::Table)
                    .col(Workouts::UserId)
                    .col(Workouts::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("workouts-user-date-index")
                    .table(Workouts::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Sets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WorkoutExercises::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Workouts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Workouts {
    Table,
    Id,
    UserId,
    Date,
    Note,
}

#[derive(Iden)]
enum WorkoutExercises {
    Table,
    Id,
    WorkoutId,
    ExerciseId,
    OrderIndex,
}

#[derive(Iden)]
enum Sets {
    Table,
    Id,
    WorkoutExerciseId,
    SetIndex,
    Weight,
    Reps,
    Rpe,
    IsWarmup,
    Note,
}
