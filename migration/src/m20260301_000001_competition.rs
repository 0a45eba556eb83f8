use sea_orm_migration::{prelude::*, schema::*};

static IDX_COMPETITION_TRACK_ENDS_AT: &str = "idx-competition-track-ends_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Competition::Table)
                    .if_not_exists()
                    .col(big_integer(Competition::Id).primary_key())
                    .col(string(Competition::Title))
                    .col(string(Competition::Metric))
                    .col(string_len(Competition::Track, 4))
                    .col(timestamp(Competition::StartsAt))
                    .col(timestamp(Competition::EndsAt))
                    .col(string(Competition::VerificationSecret))
                    .col(string_null(Competition::AnnouncementMessageId))
                    .col(string_null(Competition::LeaderboardMessageId))
                    .col(boolean(Competition::FinalLeaderboardSent).default(false))
                    .col(integer(Competition::RotationIndex).default(0))
                    .col(timestamp(Competition::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMPETITION_TRACK_ENDS_AT)
                    .table(Competition::Table)
                    .col(Competition::Track)
                    .col(Competition::EndsAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMPETITION_TRACK_ENDS_AT)
                    .table(Competition::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Competition::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Competition {
    Table,
    Id,
    Title,
    Metric,
    Track,
    StartsAt,
    EndsAt,
    VerificationSecret,
    AnnouncementMessageId,
    LeaderboardMessageId,
    FinalLeaderboardSent,
    RotationIndex,
    CreatedAt,
}
