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
                    .table(BodyMetrics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BodyMetrics::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BodyMetrics::UserId).integer().not_null())
                    .col(ColumnDef::new(BodyMetrics::Date).date_time().not_null())
                    .col(ColumnDef::new(BodyMetrics::BodyWeight).double().null())
                    .col(ColumnDef::new(BodyMetrics::BodyFatPercent).double().null())
                    .col(ColumnDef::new(BodyMetrics::Note).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_body_metrics_users")
                            .from(BodyMetrics::Table, BodyMetrics::UserId)
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
                    .table(HeightRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HeightRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HeightRecords::UserId).integer().not_null())
                    .col(ColumnDef::new(HeightRecords::HeightCm).double().not_null())
                    .col(ColumnDef::new(HeightRecords::Date).date_time().not_null())
                    .col(ColumnDef::new(HeightRecords::Note).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_height_records_users")
                            .from(HeightRecords::Table, HeightRecords::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("body-metrics-user-date-index")
                    .table(BodyMetrics::Table)
                    .col(BodyMetrics::UserId)
                    .col(BodyMetrics::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("body-metrics-user-date-index")
                    .table(BodyMetrics::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HeightRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BodyMetrics::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum BodyMetrics {
    Table,
    Id,
    UserId,
    Date,
    BodyWeight,
    BodyFatPercent,
    Note,
}

#[derive(Iden)]
enum HeightRecords {
    Table,
    Id,
    UserId,
    HeightCm,
    Date,
    Note,
}
