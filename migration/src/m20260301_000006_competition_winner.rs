use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_competition::Competition;

static FK_COMPETITION_WINNER_COMPETITION_ID: &str = "fk-competition_winner-competition_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompetitionWinner::Table)
                    .if_not_exists()
                    .col(big_integer(CompetitionWinner::CompetitionId).primary_key())
                    .col(string(CompetitionWinner::PlayerName))
                    .col(big_integer(CompetitionWinner::MetricGain))
                    .col(timestamp(CompetitionWinner::RecordedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMPETITION_WINNER_COMPETITION_ID)
                            .from(CompetitionWinner::Table, CompetitionWinner::CompetitionId)
                            .to(Competition::Table, Competition::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompetitionWinner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CompetitionWinner {
    Table,
    CompetitionId,
    PlayerName,
    MetricGain,
    RecordedAt,
}
