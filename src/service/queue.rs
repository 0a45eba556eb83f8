use chrono::Utc;
use dioxus_logger::tracing;
use entity::sea_orm_active_enums::Track;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        config_value::{ConfigValueRepository, ROTATION_PERIOD_WEEKS},
        is_unique_violation,
        queue::QueueRepository,
    },
    error::{competition::CompetitionError, Error},
    service::catalog::MetricCatalog,
};

/// Rotation period used until a moderator sets one.
pub const DEFAULT_ROTATION_PERIOD_WEEKS: i64 = 1;

/// Moderator requests that steer the rotation.
pub struct CompetitionQueueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompetitionQueueService<'a> {
    /// Creates a new instance of [`CompetitionQueueService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Queues `metric` to be used by the next competition of `track` ahead of votes.
    ///
    /// # Returns
    /// - `Ok(Model)` - The queued entry
    /// - `Err(CompetitionError::UnknownMetric)` - Metric not valid for the track
    /// - `Err(CompetitionError::DuplicateQueueEntry)` - Metric already queued
    pub async fn queue_competition(
        &self,
        track: Track,
        metric: &str,
    ) -> Result<entity::competition_queue::Model, Error> {
        MetricCatalog::new(self.db).require(track, metric).await?;

        let result = QueueRepository::new(self.db)
            .push(track, metric.to_string(), Utc::now())
            .await;

        match result {
            Ok(entry) => {
                tracing::info!("Queued {} for the next {} competition", metric, track.label());
                Ok(entry)
            }
            Err(e) if is_unique_violation(&e) => Err(CompetitionError::DuplicateQueueEntry {
                track,
                metric: metric.to_string(),
            }
            .into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Entries waiting for `track`, oldest first.
    pub async fn queued(&self, track: Track) -> Result<Vec<entity::competition_queue::Model>, Error> {
        Ok(QueueRepository::new(self.db).get_by_track(track).await?)
    }

    /// Stores the rotation period requested by moderators.
    ///
    /// # Returns
    /// - `Ok(())` - Period stored
    /// - `Err(CompetitionError::InvalidRotationPeriod)` - `weeks` is below 1
    pub async fn set_rotation_period(&self, weeks: i64) -> Result<(), Error> {
        if weeks < 1 {
            return Err(CompetitionError::InvalidRotationPeriod(weeks).into());
        }

        ConfigValueRepository::new(self.db)
            .set(ROTATION_PERIOD_WEEKS, weeks.to_string())
            .await?;

        tracing::info!("Rotation period set to {} week(s)", weeks);

        Ok(())
    }

    pub async fn rotation_period(&self) -> Result<i64, Error> {
        let value = ConfigValueRepository::new(self.db)
            .get(ROTATION_PERIOD_WEEKS)
            .await?;

        match value {
            Some(value) => value.parse::<i64>().map_err(|e| {
                Error::ParseError(format!("{} value {:?}: {}", ROTATION_PERIOD_WEEKS, value, e))
            }),
            None => Ok(DEFAULT_ROTATION_PERIOD_WEEKS),
        }
    }
}
