use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_competition::Competition;

static FK_COMPETITION_VOTE_COMPETITION_ID: &str = "fk-competition_vote-competition_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The composite key is what makes a second vote from the same member fail on insert.
        manager
            .create_table(
                Table::create()
                    .table(CompetitionVote::Table)
                    .if_not_exists()
                    .col(big_integer(CompetitionVote::MemberId))
                    .col(big_integer(CompetitionVote::CompetitionId))
                    .col(string(CompetitionVote::Choice))
                    .col(timestamp(CompetitionVote::CastAt))
                    .primary_key(
                        Index::create()
                            .col(CompetitionVote::MemberId)
                            .col(CompetitionVote::CompetitionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMPETITION_VOTE_COMPETITION_ID)
                            .from(CompetitionVote::Table, CompetitionVote::CompetitionId)
                            .to(Competition::Table, Competition::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompetitionVote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CompetitionVote {
    Table,
    MemberId,
    CompetitionId,
    Choice,
    CastAt,
}
