use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

pub struct VoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VoteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a vote; a second vote for the same member and competition fails with a unique
    /// constraint violation.
    pub async fn create(
        &self,
        member_id: i64,
        competition_id: i64,
        choice: String,
        cast_at: DateTime<Utc>,
    ) -> Result<entity::competition_vote::Model, DbErr> {
        entity::competition_vote::ActiveModel {
            member_id: ActiveValue::Set(member_id),
            competition_id: ActiveValue::Set(competition_id),
            choice: ActiveValue::Set(choice),
            cast_at: ActiveValue::Set(cast_at.naive_utc()),
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_competition(
        &self,
        competition_id: i64,
    ) -> Result<Vec<entity::competition_vote::Model>, DbErr> {
        entity::prelude::CompetitionVote::find()
            .filter(entity::competition_vote::Column::CompetitionId.eq(competition_id))
            .all(self.db)
            .await
    }

    /// Number of votes per choice for a competition, unordered.
    pub async fn count_by_choice(&self, competition_id: i64) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::CompetitionVote::find()
            .select_only()
            .column(entity::competition_vote::Column::Choice)
            .column_as(entity::competition_vote::Column::MemberId.count(), "votes")
            .filter(entity::competition_vote::Column::CompetitionId.eq(competition_id))
            .group_by(entity::competition_vote::Column::Choice)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await
    }

    pub async fn delete_by_competition(&self, competition_id: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::CompetitionVote::delete_many()
            .filter(entity::competition_vote::Column::CompetitionId.eq(competition_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
