use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::Track;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{constant::TEST_VERIFICATION_SECRET, TestError, TestSetup};

impl TestSetup {
    pub fn competition<'a>(&'a mut self) -> CompetitionFixtures<'a> {
        CompetitionFixtures { setup: self }
    }
}

pub struct CompetitionFixtures<'a> {
    pub setup: &'a mut TestSetup,
}

/// Title the engine would give a competition on `metric`.
pub fn mock_title(track: Track, metric: &str) -> String {
    format!("{} {}", metric.replace('_', " ").to_uppercase(), track.label())
}

impl<'a> CompetitionFixtures<'a> {
    /// Build an unsaved competition row with the given window.
    pub fn mock_competition(
        &self,
        id: i64,
        track: Track,
        metric: &str,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> entity::competition::ActiveModel {
        entity::competition::ActiveModel {
            id: ActiveValue::Set(id),
            title: ActiveValue::Set(mock_title(track, metric)),
            metric: ActiveValue::Set(metric.to_string()),
            track: ActiveValue::Set(track),
            starts_at: ActiveValue::Set(starts_at.naive_utc()),
            ends_at: ActiveValue::Set(ends_at.naive_utc()),
            verification_secret: ActiveValue::Set(TEST_VERIFICATION_SECRET.to_string()),
            announcement_message_id: ActiveValue::Set(None),
            leaderboard_message_id: ActiveValue::Set(None),
            final_leaderboard_sent: ActiveValue::Set(false),
            rotation_index: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
    }

    pub async fn insert_competition(
        &mut self,
        id: i64,
        track: Track,
        metric: &str,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Result<entity::competition::Model, TestError> {
        let model = self.mock_competition(id, track, metric, starts_at, ends_at);
        Ok(model.insert(&self.setup.db).await?)
    }

    /// Competition that started a day ago and ends in six days.
    pub async fn insert_active_competition(
        &mut self,
        id: i64,
        track: Track,
        metric: &str,
    ) -> Result<entity::competition::Model, TestError> {
        let now = Utc::now();
        self.insert_competition(
            id,
            track,
            metric,
            now - Duration::days(1),
            now + Duration::days(6),
        )
        .await
    }

    /// Competition that starts tomorrow.
    pub async fn insert_scheduled_competition(
        &mut self,
        id: i64,
        track: Track,
        metric: &str,
    ) -> Result<entity::competition::Model, TestError> {
        let now = Utc::now();
        self.insert_competition(
            id,
            track,
            metric,
            now + Duration::days(1),
            now + Duration::days(8),
        )
        .await
    }

    /// Competition that ended `days_ago` days ago after running for a week.
    pub async fn insert_ended_competition(
        &mut self,
        id: i64,
        track: Track,
        metric: &str,
        days_ago: i64,
    ) -> Result<entity::competition::Model, TestError> {
        let ends_at = Utc::now() - Duration::days(days_ago);
        self.insert_competition(id, track, metric, ends_at - Duration::days(7), ends_at)
            .await
    }

    pub async fn insert_vote(
        &mut self,
        member_id: i64,
        competition_id: i64,
        choice: &str,
    ) -> Result<entity::competition_vote::Model, TestError> {
        let model = entity::competition_vote::ActiveModel {
            member_id: ActiveValue::Set(member_id),
            competition_id: ActiveValue::Set(competition_id),
            choice: ActiveValue::Set(choice.to_string()),
            cast_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(model.insert(&self.setup.db).await?)
    }

    /// Insert `count` votes for `choice` from members numbered from `first_member_id`.
    pub async fn insert_votes(
        &mut self,
        competition_id: i64,
        choice: &str,
        first_member_id: i64,
        count: i64,
    ) -> Result<(), TestError> {
        for member_id in first_member_id..first_member_id + count {
            self.insert_vote(member_id, competition_id, choice).await?;
        }

        Ok(())
    }

    pub async fn insert_queue_entry(
        &mut self,
        track: Track,
        metric: &str,
        queued_at: DateTime<Utc>,
    ) -> Result<entity::competition_queue::Model, TestError> {
        let model = entity::competition_queue::ActiveModel {
            metric: ActiveValue::Set(metric.to_string()),
            track: ActiveValue::Set(track),
            queued_at: ActiveValue::Set(queued_at.naive_utc()),
        };

        Ok(model.insert(&self.setup.db).await?)
    }

    pub async fn insert_config_value(&mut self, key: &str, value: &str) -> Result<(), TestError> {
        let model = entity::config_value::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
        };
        entity::prelude::ConfigValue::insert(model)
            .exec(&self.setup.db)
            .await?;

        Ok(())
    }
}
