use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::Track;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

/// Values for a competition that was just registered with Wise Old Man.
#[derive(Debug, Clone)]
pub struct NewCompetition {
    pub id: i64,
    pub title: String,
    pub metric: String,
    pub track: Track,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub verification_secret: String,
    pub rotation_index: i32,
}

/// Remote-authoritative fields overwritten during reconciliation.
#[derive(Debug, Clone)]
pub struct CompetitionDetailsUpdate {
    pub title: String,
    pub metric: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

pub struct CompetitionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompetitionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        competition: NewCompetition,
    ) -> Result<entity::competition::Model, DbErr> {
        entity::competition::ActiveModel {
            id: ActiveValue::Set(competition.id),
            title: ActiveValue::Set(competition.title),
            metric: ActiveValue::Set(competition.metric),
            track: ActiveValue::Set(competition.track),
            starts_at: ActiveValue::Set(competition.starts_at.naive_utc()),
            ends_at: ActiveValue::Set(competition.ends_at.naive_utc()),
            verification_secret: ActiveValue::Set(competition.verification_secret),
            announcement_message_id: ActiveValue::Set(None),
            leaderboard_message_id: ActiveValue::Set(None),
            final_leaderboard_sent: ActiveValue::Set(false),
            rotation_index: ActiveValue::Set(competition.rotation_index),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<entity::competition::Model>, DbErr> {
        entity::prelude::Competition::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::competition::Model>, DbErr> {
        entity::prelude::Competition::find()
            .order_by_asc(entity::competition::Column::Id)
            .all(self.db)
            .await
    }

    /// Scheduled or active competitions of a track (`ends_at > now`), soonest ending first.
    pub async fn find_current(
        &self,
        track: Track,
        now: DateTime<Utc>,
    ) -> Result<Vec<entity::competition::Model>, DbErr> {
        entity::prelude::Competition::find()
            .filter(entity::competition::Column::Track.eq(track))
            .filter(entity::competition::Column::EndsAt.gt(now.naive_utc()))
            .order_by_asc(entity::competition::Column::EndsAt)
            .all(self.db)
            .await
    }

    /// Competition of a track running at `now` (`starts_at <= now < ends_at`).
    pub async fn find_active(
        &self,
        track: Track,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::competition::Model>, DbErr> {
        entity::prelude::Competition::find()
            .filter(entity::competition::Column::Track.eq(track))
            .filter(entity::competition::Column::StartsAt.lte(now.naive_utc()))
            .filter(entity::competition::Column::EndsAt.gt(now.naive_utc()))
            .order_by_desc(entity::competition::Column::StartsAt)
            .one(self.db)
            .await
    }

    /// Next competition of a track that has not started yet.
    pub async fn find_scheduled(
        &self,
        track: Track,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::competition::Model>, DbErr> {
        entity::prelude::Competition::find()
            .filter(entity::competition::Column::Track.eq(track))
            .filter(entity::competition::Column::StartsAt.gt(now.naive_utc()))
            .order_by_asc(entity::competition::Column::StartsAt)
            .one(self.db)
            .await
    }

    /// Most recently ended competition of a track.
    pub async fn find_latest_ended(
        &self,
        track: Track,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::competition::Model>, DbErr> {
        entity::prelude::Competition::find()
            .filter(entity::competition::Column::Track.eq(track))
            .filter(entity::competition::Column::EndsAt.lte(now.naive_utc()))
            .order_by_desc(entity::competition::Column::EndsAt)
            .one(self.db)
            .await
    }

    /// Ended competitions of a track still waiting for their final results post, oldest first.
    pub async fn find_ended_pending_results(
        &self,
        track: Track,
        now: DateTime<Utc>,
    ) -> Result<Vec<entity::competition::Model>, DbErr> {
        entity::prelude::Competition::find()
            .filter(entity::competition::Column::Track.eq(track))
            .filter(entity::competition::Column::EndsAt.lte(now.naive_utc()))
            .filter(entity::competition::Column::FinalLeaderboardSent.eq(false))
            .order_by_asc(entity::competition::Column::EndsAt)
            .all(self.db)
            .await
    }

    /// Earliest `ends_at` across every current competition of any track.
    pub async fn earliest_current_end(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>, DbErr> {
        let next = entity::prelude::Competition::find()
            .filter(entity::competition::Column::EndsAt.gt(now.naive_utc()))
            .order_by_asc(entity::competition::Column::EndsAt)
            .one(self.db)
            .await?;

        Ok(next.map(|c| c.ends_at.and_utc()))
    }

    pub async fn set_announcement_message(
        &self,
        id: i64,
        message_id: Option<String>,
    ) -> Result<(), DbErr> {
        entity::prelude::Competition::update_many()
            .col_expr(
                entity::competition::Column::AnnouncementMessageId,
                Expr::value(message_id),
            )
            .filter(entity::competition::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn set_leaderboard_message(
        &self,
        id: i64,
        message_id: Option<String>,
    ) -> Result<(), DbErr> {
        entity::prelude::Competition::update_many()
            .col_expr(
                entity::competition::Column::LeaderboardMessageId,
                Expr::value(message_id),
            )
            .filter(entity::competition::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn mark_final_leaderboard_sent(&self, id: i64) -> Result<(), DbErr> {
        entity::prelude::Competition::update_many()
            .col_expr(
                entity::competition::Column::FinalLeaderboardSent,
                Expr::value(true),
            )
            .filter(entity::competition::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn update_details(
        &self,
        id: i64,
        details: CompetitionDetailsUpdate,
    ) -> Result<(), DbErr> {
        entity::prelude::Competition::update_many()
            .col_expr(entity::competition::Column::Title, Expr::value(details.title))
            .col_expr(
                entity::competition::Column::Metric,
                Expr::value(details.metric),
            )
            .col_expr(
                entity::competition::Column::StartsAt,
                Expr::value(details.starts_at.naive_utc()),
            )
            .col_expr(
                entity::competition::Column::EndsAt,
                Expr::value(details.ends_at.naive_utc()),
            )
            .filter(entity::competition::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes the competition row, returning the number of rows removed.
    pub async fn delete(&self, id: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::Competition::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
