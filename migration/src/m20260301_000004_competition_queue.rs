use sea_orm_migration::{prelude::*, schema::*};

static IDX_COMPETITION_QUEUE_TRACK: &str = "idx-competition_queue-track";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompetitionQueue::Table)
                    .if_not_exists()
                    .col(string(CompetitionQueue::Metric).primary_key())
                    .col(string_len(CompetitionQueue::Track, 4))
                    .col(timestamp(CompetitionQueue::QueuedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMPETITION_QUEUE_TRACK)
                    .table(CompetitionQueue::Table)
                    .col(CompetitionQueue::Track)
                    .col(CompetitionQueue::QueuedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMPETITION_QUEUE_TRACK)
                    .table(CompetitionQueue::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CompetitionQueue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CompetitionQueue {
    Table,
    Metric,
    Track,
    QueuedAt,
}
