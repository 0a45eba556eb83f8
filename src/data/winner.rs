use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::Track;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct WinnerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WinnerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records the winner of a competition, replacing any earlier record for it.
    pub async fn upsert(
        &self,
        competition_id: i64,
        player_name: String,
        metric_gain: i64,
        recorded_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        let model = entity::competition_winner::ActiveModel {
            competition_id: ActiveValue::Set(competition_id),
            player_name: ActiveValue::Set(player_name),
            metric_gain: ActiveValue::Set(metric_gain),
            recorded_at: ActiveValue::Set(recorded_at.naive_utc()),
        };

        entity::prelude::CompetitionWinner::insert(model)
            .on_conflict(
                OnConflict::column(entity::competition_winner::Column::CompetitionId)
                    .update_columns([
                        entity::competition_winner::Column::PlayerName,
                        entity::competition_winner::Column::MetricGain,
                        entity::competition_winner::Column::RecordedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn find_by_competition(
        &self,
        competition_id: i64,
    ) -> Result<Option<entity::competition_winner::Model>, DbErr> {
        entity::prelude::CompetitionWinner::find_by_id(competition_id)
            .one(self.db)
            .await
    }

    /// Every recorded winner, oldest competition first.
    pub async fn get_all(&self) -> Result<Vec<entity::competition_winner::Model>, DbErr> {
        entity::prelude::CompetitionWinner::find()
            .order_by_asc(entity::competition_winner::Column::CompetitionId)
            .all(self.db)
            .await
    }

    /// Winners of the competitions on `track`, oldest competition first.
    pub async fn get_by_track(
        &self,
        track: Track,
    ) -> Result<Vec<entity::competition_winner::Model>, DbErr> {
        entity::prelude::CompetitionWinner::find()
            .inner_join(entity::prelude::Competition)
            .filter(entity::competition::Column::Track.eq(track))
            .order_by_asc(entity::competition_winner::Column::CompetitionId)
            .all(self.db)
            .await
    }

    pub async fn delete_by_competition(&self, competition_id: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::CompetitionWinner::delete_by_id(competition_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
