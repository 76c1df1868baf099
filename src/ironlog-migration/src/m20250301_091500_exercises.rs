use sea_orm_migration::prelude::*;

use crate::m20250301_090000_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Exercises::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exercises::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // Null for built-in exercises
                    .col(ColumnDef::new(Exercises::UserId).integer().null())
                    .col(ColumnDef::new(Exercises::Name).string_len(128).not_null())
                    .col(
                        ColumnDef::new(Exercises::MuscleGroup)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Exercises::IsBuiltin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exercises_users")
                            .from(Exercises::Table, Exercises::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Exercises::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Exercises {
    Table,
    Id,
    UserId,
    Name,
    MuscleGroup,
    IsBuiltin,
}
