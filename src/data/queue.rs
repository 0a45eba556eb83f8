use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::Track;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct QueueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> QueueRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a metric to a track's queue; a metric already queued fails with a unique
    /// constraint violation.
    pub async fn push(
        &self,
        track: Track,
        metric: String,
        queued_at: DateTime<Utc>,
    ) -> Result<entity::competition_queue::Model, DbErr> {
        entity::competition_queue::ActiveModel {
            metric: ActiveValue::Set(metric),
            track: ActiveValue::Set(track),
            queued_at: ActiveValue::Set(queued_at.naive_utc()),
        }
        .insert(self.db)
        .await
    }

    /// Oldest queued entry for a track.
    pub async fn peek(
        &self,
        track: Track,
    ) -> Result<Option<entity::competition_queue::Model>, DbErr> {
        entity::prelude::CompetitionQueue::find()
            .filter(entity::competition_queue::Column::Track.eq(track))
            .order_by_asc(entity::competition_queue::Column::QueuedAt)
            .order_by_asc(entity::competition_queue::Column::Metric)
            .one(self.db)
            .await
    }

    pub async fn get_by_track(
        &self,
        track: Track,
    ) -> Result<Vec<entity::competition_queue::Model>, DbErr> {
        entity::prelude::CompetitionQueue::find()
            .filter(entity::competition_queue::Column::Track.eq(track))
            .order_by_asc(entity::competition_queue::Column::QueuedAt)
            .order_by_asc(entity::competition_queue::Column::Metric)
            .all(self.db)
            .await
    }

    pub async fn remove(&self, metric: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::CompetitionQueue::delete_by_id(metric.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
